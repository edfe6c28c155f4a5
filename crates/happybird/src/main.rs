use std::path::PathBuf;

use happybird_game::GameConfig;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let asset_dir = args.next().unwrap_or_else(|| "assets".to_string());
    let best_score_path = args
        .next()
        .unwrap_or_else(|| "best_score.txt".to_string());
    log::info!("Assets from '{}', best score in '{}'", asset_dir, best_score_path);

    let config = GameConfig::builder()
        .asset_dir(PathBuf::from(asset_dir))
        .best_score_path(PathBuf::from(best_score_path))
        .build();

    if let Err(e) = happybird::run(config) {
        log::error!("{:#}", e);
        eprintln!("happybird: {:#}", e);
        std::process::exit(1);
    }
}
