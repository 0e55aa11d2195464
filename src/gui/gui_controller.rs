//! GUI controller
//!
//! Wires the Slint window callbacks to the [`PortalController`] and pushes a fresh
//! [`PortalView`] into the window after every interaction. Everything runs on the
//! UI thread, so the controller is shared between callbacks through `Rc<RefCell<_>>`.

use crate::{CardData, MainWindow};
use appportal::catalog::CategoryFilter;
use appportal::config::WindowState;
use appportal::controller::{CardView, PortalController, PortalView};
use appportal::error::{PortalError, Result};
use slint::{ComponentHandle, LogicalSize, ModelRc, SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Owns the main window and the controller it renders
pub struct GuiController {
    window: MainWindow,
    controller: Rc<RefCell<PortalController>>,
}

impl GuiController {
    /// Create the window, connect callbacks and render the initial view
    pub fn new(controller: PortalController, window_state: WindowState) -> Result<Self> {
        let window = MainWindow::new().map_err(|e| PortalError::GuiError(Box::new(e)))?;

        let size = window_state.clamped();
        #[expect(
            clippy::cast_precision_loss,
            reason = "Window dimensions are far below f32's exact integer range"
        )]
        window
            .window()
            .set_size(LogicalSize::new(size.width as f32, size.height as f32));

        let categories: Vec<SharedString> = CategoryFilter::ALL_CHOICES
            .iter()
            .map(|choice| SharedString::from(choice.label()))
            .collect();
        window.set_categories(ModelRc::new(VecModel::from(categories)));

        let gui = Self {
            window,
            controller: Rc::new(RefCell::new(controller)),
        };
        gui.connect_callbacks();
        apply_view(&gui.window, &gui.controller.borrow().view());

        info!("GUI controller initialized");
        Ok(gui)
    }

    /// Wrap a controller mutation taking the callback's string argument so the
    /// view is re-rendered afterwards
    fn bind<F>(&self, action: F) -> impl Fn(SharedString) + 'static
    where
        F: Fn(&mut PortalController, &str) + 'static,
    {
        let weak = self.window.as_weak();
        let controller = Rc::clone(&self.controller);
        move |arg: SharedString| {
            action(&mut controller.borrow_mut(), arg.as_str());
            if let Some(window) = weak.upgrade() {
                apply_view(&window, &controller.borrow().view());
            }
        }
    }

    fn connect_callbacks(&self) {
        self.window.on_search_changed(self.bind(|controller, text| {
            controller.set_search_query(text);
        }));

        self.window.on_category_selected(self.bind(|controller, label| {
            match CategoryFilter::from_label(label) {
                Some(category) => controller.select_category(category),
                None => warn!("Ignoring unknown category {}", label),
            }
        }));

        self.window.on_favorite_toggled(self.bind(|controller, id| {
            controller.toggle_favorite(id);
        }));

        self.window.on_app_activated(self.bind(|controller, id| {
            // Already logged and shown in the status message
            if let Err(e) = controller.open_app(id) {
                debug!("Launch of {} not completed: {}", id, e);
            }
        }));

        let toggle_theme = self.bind(|controller, _| {
            controller.toggle_theme();
        });
        self.window
            .on_theme_toggled(move || toggle_theme(SharedString::default()));

        let reset = self.bind(|controller, _| controller.reset_filters());
        self.window
            .on_reset_requested(move || reset(SharedString::default()));
    }

    /// Run the event loop until the window closes; returns the final window size
    pub fn run(self) -> Result<WindowState> {
        self.window
            .run()
            .map_err(|e| PortalError::GuiError(Box::new(e)))?;

        let window = self.window.window();
        let size = window.size().to_logical(window.scale_factor());
        debug!("Window closed at {}x{}", size.width, size.height);

        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "Logical window sizes are small positive values"
        )]
        let state = WindowState {
            width: size.width.round() as u32,
            height: size.height.round() as u32,
        };
        Ok(state.clamped())
    }
}

fn card_data(card: &CardView) -> CardData {
    CardData {
        id: card.id.as_str().into(),
        name: card.name.as_str().into(),
        category: card.category.as_str().into(),
        description: card.description.as_str().into(),
        icon: card.icon.as_str().into(),
        is_favorite: card.is_favorite,
    }
}

fn cards_model(cards: &[CardView]) -> ModelRc<CardData> {
    ModelRc::new(VecModel::from(cards.iter().map(card_data).collect::<Vec<_>>()))
}

/// Push a view snapshot into the window
fn apply_view(window: &MainWindow, view: &PortalView) {
    window.set_cards(cards_model(&view.cards));
    window.set_quick_access(cards_model(&view.quick_access));
    window.set_heading(view.heading.as_str().into());
    window.set_active_category(view.active_category.label().into());
    window.set_show_empty_state(view.show_empty_state);
    window.set_dark_mode(view.dark_mode);
    window.set_status_message(view.status_message.as_str().into());

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "The catalog holds far fewer than i32::MAX records"
    )]
    window.set_result_count(view.result_count as i32);

    // Only write the search text back when it changed (reset), so typing keeps the cursor
    if window.get_search_text().as_str() != view.search_query {
        window.set_search_text(view.search_query.as_str().into());
    }

    debug!(
        "View applied: {} cards, {} quick access",
        view.result_count,
        view.quick_access.len()
    );
}
