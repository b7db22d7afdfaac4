// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Command line entry point: builds a launch intent and runs one edit session.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use i18n_embed::DesktopLanguageRequester;
use tokio::sync::mpsc;

use gallery_editor::app::{AppMessage, Editor, MenuAction, RasterCropView, ResultCode, runtime};
use gallery_editor::config::AppConfig;
use gallery_editor::constant::{EXTRA_ASPECT_X, EXTRA_ASPECT_Y, EXTRA_CROP, EXTRA_OUTPUT};
use gallery_editor::domain::crop::CropRegion;
use gallery_editor::domain::intent::{ExtraValue, LaunchIntent};
use gallery_editor::domain::session::Size;
use gallery_editor::domain::uri::Uri;
use gallery_editor::host::{AuthorityResolver, Host, LogScanner, OpenLauncher, PathResolver};
use gallery_editor::i18n;
use gallery_editor::ui::{SaveAsAnswer, ScriptedDialogs, StderrNotifier};

/// Crop, rotate, flip, resize and save an image.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    /// Image to edit: a `file://` or `content://` URI, or a local path.
    pub image: Option<String>,

    /// Where to save instead of the source location.
    #[arg(long)]
    pub output: Option<String>,

    /// Crop request mode; only the literal "true" enables it.
    #[arg(long)]
    pub crop: Option<String>,

    /// Requested horizontal aspect of a crop request.
    #[arg(long)]
    pub aspect_x: Option<i32>,

    /// Requested vertical aspect of a crop request.
    #[arg(long)]
    pub aspect_y: Option<i32>,

    /// Initial crop rectangle as x,y,width,height in source pixels.
    #[arg(long)]
    pub crop_rect: Option<CropRegion>,

    /// Menu actions and lifecycle events, applied in order.
    #[arg(long = "action", value_enum)]
    pub actions: Vec<Action>,

    /// Answers for resize dialogs, as WIDTHxHEIGHT, in order.
    #[arg(long)]
    pub resize: Vec<Size>,

    /// Answer the save-as dialog with this path instead of the suggestion.
    #[arg(long, conflicts_with = "cancel_save")]
    pub save_as: Option<PathBuf>,

    /// Cancel the save-as dialog.
    #[arg(long)]
    pub cancel_save: bool,

    /// Config file (defaults to the user config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug output.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Rotate,
    Resize,
    FlipH,
    FlipV,
    Edit,
    /// The screen lost the foreground.
    Stop,
    /// The screen came back to the foreground.
    Resume,
}

impl From<Action> for AppMessage {
    fn from(action: Action) -> Self {
        match action {
            Action::Save => AppMessage::Menu(MenuAction::SaveAs),
            Action::Rotate => AppMessage::Menu(MenuAction::Rotate),
            Action::Resize => AppMessage::Menu(MenuAction::Resize),
            Action::FlipH => AppMessage::Menu(MenuAction::FlipHorizontal),
            Action::FlipV => AppMessage::Menu(MenuAction::FlipVertical),
            Action::Edit => AppMessage::Menu(MenuAction::Edit),
            Action::Stop => AppMessage::Stopped,
            Action::Resume => AppMessage::Resumed,
        }
    }
}

/// Local paths become `file://` URIs; anything with a scheme is kept.
fn image_location(arg: &str) -> anyhow::Result<String> {
    if arg.starts_with("file:") || arg.contains("://") {
        return Ok(arg.to_string());
    }
    let path = std::path::absolute(Path::new(arg))?;
    Ok(Uri::from_path(&path).to_string())
}

fn build_intent(args: &Args) -> anyhow::Result<LaunchIntent> {
    let mut intent = LaunchIntent {
        data: args.image.as_deref().map(image_location).transpose()?,
        ..LaunchIntent::default()
    };

    let extras = &mut intent.extras;
    if let Some(output) = &args.output {
        extras.put(EXTRA_OUTPUT, ExtraValue::Str(image_location(output)?));
    }
    if let Some(crop) = &args.crop {
        extras.put(EXTRA_CROP, ExtraValue::Str(crop.clone()));
    }
    if let Some(x) = args.aspect_x {
        extras.put(EXTRA_ASPECT_X, ExtraValue::Int(x));
    }
    if let Some(y) = args.aspect_y {
        extras.put(EXTRA_ASPECT_Y, ExtraValue::Int(y));
    }

    Ok(intent)
}

fn build_host(args: &Args, config: &AppConfig, resolver: Arc<dyn PathResolver>) -> Host {
    let save_as = match (&args.save_as, args.cancel_save) {
        (_, true) => SaveAsAnswer::Cancel,
        (Some(path), false) => SaveAsAnswer::Path(path.clone()),
        (None, false) => SaveAsAnswer::AcceptSuggested,
    };

    Host {
        dialogs: Box::new(ScriptedDialogs::new(args.resize.iter().copied(), save_as)),
        resolver: resolver.clone(),
        scanner: Box::new(LogScanner),
        launcher: Box::new(OpenLauncher::new(config.external_editor.clone(), resolver)),
        notifier: Box::new(StderrNotifier),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    i18n::init(&DesktopLanguageRequester::requested_languages());

    let config = AppConfig::load(args.config.as_deref());
    let resolver: Arc<dyn PathResolver> = Arc::new(AuthorityResolver::from_config(&config));

    let intent = build_intent(&args)?;
    let host = build_host(&args, &config, resolver.clone());
    let view = RasterCropView::new(resolver).with_crop_rect(args.crop_rect);
    let (tx, rx) = mpsc::unbounded_channel();

    let editor = match Editor::launch(&intent, Box::new(view), host, tx) {
        Ok(editor) => editor,
        Err(e) => {
            log::error!("Cannot edit: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let script = args.actions.iter().copied().map(AppMessage::from);
    let outcome = runtime::run(editor, rx, script).await;
    log::info!("Session ended: {outcome:?}");

    Ok(match outcome.result {
        ResultCode::Ok => ExitCode::SUCCESS,
        ResultCode::Canceled => ExitCode::FAILURE,
    })
}
