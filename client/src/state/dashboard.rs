//! Application controller.
//!
//! DESIGN
//! ======
//! `Dashboard` owns the persistence store and every piece of presentation
//! state, and routes user intents to them. Components hold it in one
//! `RwSignal` and call these methods inside `update`; nothing here touches the
//! DOM, so the whole interaction flow runs in native tests against a
//! `MemoryBackend`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use canvas::doc::StickerId;
use canvas::engine::{Action, StickerEngine};
use canvas::geometry::Point;
use canvas::input::{Button, Key};
use canvas::widget::{OpenWidget, WidgetId};
use store::{StateStore, StorageBackend};

use crate::state::background::{Background, UploadError};
use crate::state::config::DashboardConfig;
use crate::state::shell::{OnboardingStep, Shell};
use crate::state::toast::Toast;
use crate::state::widgets::RetiringPanels;

pub struct Dashboard<B: StorageBackend> {
    pub config: DashboardConfig,
    store: StateStore<B>,
    pub engine: StickerEngine,
    pub background: Background,
    pub shell: Shell,
    pub toast: Toast,
    pub retiring: RetiringPanels,
}

impl<B: StorageBackend> Dashboard<B> {
    /// Create the controller. Nothing is read until [`Dashboard::init`].
    pub fn new(backend: B, config: DashboardConfig) -> Self {
        let store = StateStore::with_key(backend, config.storage_key.clone());
        Self {
            config,
            store,
            engine: StickerEngine::new(),
            background: Background::default(),
            shell: Shell::default(),
            toast: Toast::default(),
            retiring: RetiringPanels::default(),
        }
    }

    /// Restore the background settings and saved stickers.
    ///
    /// Returns the number of stickers restored.
    pub fn init(&mut self) -> usize {
        self.background = Background::restore(&self.store.settings());
        let restored = self.engine.restore_stickers(&mut self.store);
        log::info!("dashboard ready: {restored} stickers, key `{}`", self.store.key());
        restored
    }

    pub fn store(&mut self) -> &mut StateStore<B> {
        &mut self.store
    }

    // --- Shell ---

    pub fn toggle_sidebar(&mut self) -> bool {
        self.shell.toggle_sidebar(&mut self.toast)
    }

    pub fn onboarding(&mut self, step: OnboardingStep) -> bool {
        self.shell.onboarding(step, &mut self.toast)
    }

    /// Hide the toast if `generation` is still current.
    pub fn expire_toast(&mut self, generation: u64) -> bool {
        self.toast.expire(generation)
    }

    // --- Canvas ---

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.engine.set_canvas_size(width, height);
    }

    pub fn drop_sticker(&mut self, kind: &str, pointer: Point) -> Vec<Action> {
        self.engine.drop_sticker(&mut self.store, &mut self.toast, kind, pointer)
    }

    pub fn pointer_down(&mut self, id: StickerId, pointer: Point, button: Button) -> Vec<Action> {
        self.engine.on_pointer_down(id, pointer, button)
    }

    pub fn pointer_move(&mut self, pointer: Point) -> Vec<Action> {
        self.engine.on_pointer_move(pointer)
    }

    pub fn pointer_up(&mut self, now_ms: f64) -> Vec<Action> {
        self.engine.on_pointer_up(&mut self.store, &mut self.toast, now_ms)
    }

    pub fn click(&mut self, pointer: Point, now_ms: f64) -> Vec<Action> {
        let before = self.engine.active_widget().cloned();
        let actions = self.engine.on_click(&mut self.toast, pointer, now_ms);
        self.retire_closed(before, &actions);
        actions
    }

    pub fn close_widget(&mut self) -> Vec<Action> {
        let before = self.engine.active_widget().cloned();
        let actions = self.engine.close_widget();
        self.retire_closed(before, &actions);
        actions
    }

    /// Drop a retiring panel after its exit delay.
    pub fn finish_retire(&mut self, panel: WidgetId) -> bool {
        self.retiring.remove(panel)
    }

    /// Escape closes both the widget and the background menu.
    pub fn key_down(&mut self, key: &Key) -> Vec<Action> {
        let before = self.engine.active_widget().cloned();
        let actions = self.engine.on_key_down(key);
        self.retire_closed(before, &actions);
        self.background.on_key_down(key);
        actions
    }

    fn retire_closed(&mut self, before: Option<OpenWidget>, actions: &[Action]) {
        let Some(widget) = before else {
            return;
        };
        let closed = actions.iter().any(|a| matches!(a, Action::WidgetClosed { panel, .. } if *panel == widget.panel));
        if closed {
            self.retiring.retire(widget);
        }
    }

    // --- Background ---

    pub fn toggle_background_menu(&mut self) -> bool {
        self.background.toggle_menu()
    }

    pub fn select_preset(&mut self, index: usize) -> bool {
        self.background.select_preset(&mut self.store, &mut self.toast, index)
    }

    /// Validate an upload before its contents are read.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] when the file is refused; the user has already
    /// been notified.
    pub fn begin_upload(&mut self, media_type: &str) -> Result<(), UploadError> {
        self.background.begin_upload(&mut self.toast, media_type)
    }

    pub fn finish_upload(&mut self, data_url: &str) {
        self.background.finish_upload(&mut self.store, &mut self.toast, data_url);
    }

    pub fn set_opacity(&mut self, value: u8) {
        self.background.set_opacity(&mut self.store, value);
    }
}
