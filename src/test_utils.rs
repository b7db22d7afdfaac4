// SPDX-License-Identifier: GPL-3.0-or-later
// src/test_utils.rs
//
// Recording fakes for the host services and helpers for editor tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::app::{AppMessage, CropWidget, Editor, EventSender, RasterCropView, Toast};
use crate::domain::crop::CropRegion;
use crate::domain::intent::{LaunchError, LaunchIntent};
use crate::domain::session::Size;
use crate::domain::uri::Uri;
use crate::host::{
    AuthorityResolver, Dialogs, EditorLauncher, Host, MediaScanner, Notifier, PathResolver,
};
use crate::ui::SaveAsAnswer;

/// Shared, cloneable log of recorded values.
#[derive(Debug)]
pub struct Recorded<T>(Arc<Mutex<Vec<T>>>);

impl<T> Clone for Recorded<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T> Default for Recorded<T> {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(Vec::new())))
    }
}

impl<T: Clone> Recorded<T> {
    pub fn push(&self, value: T) {
        self.0.lock().unwrap().push(value);
    }

    pub fn all(&self) -> Vec<T> {
        self.0.lock().unwrap().clone()
    }
}

struct RecordingNotifier(Recorded<Toast>);

impl Notifier for RecordingNotifier {
    fn toast(&self, toast: &Toast) {
        self.0.push(toast.clone());
    }
}

struct FakeDialogs {
    resize_answer: Option<Size>,
    save_as: SaveAsAnswer,
    resize_seeds: Recorded<Size>,
    save_as_seeds: Recorded<PathBuf>,
}

impl Dialogs for FakeDialogs {
    fn resize(&mut self, current: Size) -> Option<Size> {
        self.resize_seeds.push(current);
        self.resize_answer
    }

    fn save_as(&mut self, suggested: &Path) -> Option<PathBuf> {
        self.save_as_seeds.push(suggested.to_path_buf());
        match &self.save_as {
            SaveAsAnswer::AcceptSuggested => Some(suggested.to_path_buf()),
            SaveAsAnswer::Path(path) => Some(path.clone()),
            SaveAsAnswer::Cancel => None,
        }
    }
}

struct RecordingScanner(Recorded<PathBuf>);

impl MediaScanner for RecordingScanner {
    fn scan_path(&mut self, path: &Path) -> anyhow::Result<()> {
        self.0.push(path.to_path_buf());
        Ok(())
    }
}

struct FakeLauncher {
    fail: bool,
    opened: Recorded<Uri>,
}

impl EditorLauncher for FakeLauncher {
    fn open_editor(&mut self, uri: &Uri) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("no editor installed");
        }
        self.opened.push(uri.clone());
        Ok(())
    }
}

/// Builds hosts made of fakes and keeps handles to what they record.
pub struct TestHost {
    pub resolver: Arc<AuthorityResolver>,
    pub toasts: Recorded<Toast>,
    pub resize_seeds: Recorded<Size>,
    pub save_as_seeds: Recorded<PathBuf>,
    pub scanned: Recorded<PathBuf>,
    pub opened: Recorded<Uri>,
    resize_answer: Option<Size>,
    save_as: SaveAsAnswer,
    launcher_fails: bool,
}

impl TestHost {
    pub fn new(resolver: AuthorityResolver) -> Self {
        Self {
            resolver: Arc::new(resolver),
            toasts: Recorded::default(),
            resize_seeds: Recorded::default(),
            save_as_seeds: Recorded::default(),
            scanned: Recorded::default(),
            opened: Recorded::default(),
            resize_answer: None,
            save_as: SaveAsAnswer::AcceptSuggested,
            launcher_fails: false,
        }
    }

    pub fn resize_answer(mut self, width: u32, height: u32) -> Self {
        self.resize_answer = Size::new(width, height);
        self
    }

    pub fn save_as(mut self, answer: SaveAsAnswer) -> Self {
        self.save_as = answer;
        self
    }

    pub fn failing_launcher(mut self) -> Self {
        self.launcher_fails = true;
        self
    }

    pub fn host(&self) -> Host {
        let resolver: Arc<dyn PathResolver> = self.resolver.clone();
        Host {
            dialogs: Box::new(FakeDialogs {
                resize_answer: self.resize_answer,
                save_as: self.save_as.clone(),
                resize_seeds: self.resize_seeds.clone(),
                save_as_seeds: self.save_as_seeds.clone(),
            }),
            resolver,
            scanner: Box::new(RecordingScanner(self.scanned.clone())),
            launcher: Box::new(FakeLauncher {
                fail: self.launcher_fails,
                opened: self.opened.clone(),
            }),
            notifier: Box::new(RecordingNotifier(self.toasts.clone())),
        }
    }

    /// Launch an editor over a real crop view.
    pub fn launch(
        &self,
        intent: &LaunchIntent,
    ) -> Result<(Editor, UnboundedReceiver<AppMessage>), LaunchError> {
        let (tx, rx) = mpsc::unbounded_channel();
        let view = RasterCropView::new(self.resolver.clone());
        let editor = Editor::launch(intent, Box::new(view), self.host(), tx)?;
        Ok((editor, rx))
    }
}

/// Handle background completions until nothing is in flight.
pub async fn settle(editor: &mut Editor, events: &mut UnboundedReceiver<AppMessage>) {
    while editor.is_busy() && !editor.is_finished() {
        let message = events.recv().await.expect("event channel closed");
        editor.update(message);
    }
}

/// Write a `width` x `height` gradient PNG and return its path.
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    gradient(width, height).save(&path).unwrap();
    path
}

pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 5) as u8, (y * 5) as u8, 128])
    }))
}

pub fn image_size(path: &Path) -> (u32, u32) {
    image::open(path).unwrap().dimensions()
}

/// Crop widget that only records which calls it received.
#[derive(Default)]
pub struct FakeWidget {
    pub calls: Recorded<&'static str>,
}

impl CropWidget for FakeWidget {
    fn set_on_crop_image_complete_listener(&mut self, _listener: EventSender) {
        self.calls.push("set_on_crop_image_complete_listener");
    }

    fn set_image_uri_async(&mut self, _uri: &Uri) {
        self.calls.push("set_image_uri_async");
    }

    fn on_image_loaded(&mut self, _image: DynamicImage) {
        self.calls.push("on_image_loaded");
    }

    fn set_fixed_aspect_ratio(&mut self, _fixed: bool) {
        self.calls.push("set_fixed_aspect_ratio");
    }

    fn rotate_image(&mut self, _degrees: i16) {
        self.calls.push("rotate_image");
    }

    fn flip_image_horizontally(&mut self) {
        self.calls.push("flip_image_horizontally");
    }

    fn flip_image_vertically(&mut self) {
        self.calls.push("flip_image_vertically");
    }

    fn crop_rect(&self) -> Option<CropRegion> {
        None
    }

    fn rotated_degrees(&self) -> i16 {
        0
    }

    fn get_cropped_image_async(&mut self) {
        self.calls.push("get_cropped_image_async");
    }
}
