#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::Mutex;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use bloomcard_core::share;

/// Token from a launch-time share link, consumed once on first render
static LAUNCH_TOKEN: Mutex<Option<String>> = Mutex::new(None);

/// Take the launch token, if one was passed on the command line.
pub fn take_launch_token() -> Option<String> {
    LAUNCH_TOKEN.lock().ok()?.take()
}

/// Bloomcard - animated flower cards shared as links
#[derive(Parser, Debug)]
#[command(name = "bloomcard-desktop")]
#[command(about = "Bloomcard - grow an animated flower card and share it as a link")]
struct Args {
    /// Open a shared card link (or bare token) directly in recipient view
    #[arg(short, long)]
    link: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(link) = args.link {
        let token = share::token_from_link(&link).to_string();
        tracing::info!("Opening shared card from launch link");
        if let Ok(mut slot) = LAUNCH_TOKEN.lock() {
            *slot = Some(token);
        }
    }

    let window_width = 1100.0;
    let window_height = 800.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Bloomcard")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
