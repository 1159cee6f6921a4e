mod session;

use anyhow::{ensure, Context};
use session::Session;
use slidemenu_ui::{LayoutDirection, SlidingMenuConfig};

const SCREEN_WIDTH: i32 = 800;
const SCREEN_HEIGHT: i32 = 600;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let direction = if std::env::args().any(|arg| arg == "--rtl") {
        LayoutDirection::Rtl
    } else {
        LayoutDirection::Ltr
    };

    println!("=== Sliding Menu Demo ({direction:?}) ===");
    println!("Scripted gestures on a {SCREEN_WIDTH}x{SCREEN_HEIGHT} screen.");
    println!("Set RUST_LOG=debug to see every slide step.");
    println!();

    let config = SlidingMenuConfig::default().with_sliding_padding(180);
    let mut session = Session::new(config, SCREEN_WIDTH, SCREEN_HEIGHT, direction)
        .context("failed to set up the sliding menu")?;
    run_script(&mut session, direction)?;

    println!("Done.");
    Ok(())
}

fn run_script(session: &mut Session, direction: LayoutDirection) -> anyhow::Result<()> {
    let width = session.screen_width();
    // Coordinates below are written for LTR and mirrored for RTL.
    let mirror = |x: f32| if direction.is_ltr() { x } else { width - x };

    println!("1. Swipe from the edge past halfway");
    session.swipe(mirror(10.0), mirror(500.0))?;
    ensure!(session.menu().is_menu_open(), "edge swipe should open the menu");

    println!("2. Tap the visible strip of content");
    session.tap(mirror(760.0))?;
    ensure!(!session.menu().is_menu_open(), "tap should close the menu");

    println!("3. Short edge swipe springs back");
    session.swipe(mirror(10.0), mirror(150.0))?;
    ensure!(!session.menu().is_menu_open(), "short swipe should stay closed");

    println!("4. Touch in the middle of closed content reaches the content panel");
    session.tap(mirror(400.0))?;

    println!("5. Programmatic open and close");
    session.menu().open_menu();
    session.settle()?;
    session.menu().close_menu();
    session.settle()?;
    ensure!(!session.menu().is_menu_open(), "menu should end closed");

    Ok(())
}
