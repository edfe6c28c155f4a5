use anyhow::Result;
use happybird_game::{GameConfig, HappyBirdApp};
use happybird_sdl2::App;
use happybird_sdl2::{SdlContext, SdlInitInfo};

pub fn run(config: GameConfig) -> Result<()> {
    let app = HappyBirdApp::new(config)?;
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .fps(app.fps())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}
