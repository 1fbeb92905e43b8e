use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, HtmlCanvasElement, Window};

use super::canvas::Canvas2dSurface;
use super::dom::{self, DocumentTheme, LocalStore};
use crate::error::{Error, Result};
use crate::render_loop::{FrameHandle, FrameScheduler};
use crate::rng::Rng;
use crate::session::Session;
use crate::theme::ThemeController;

/// `requestAnimationFrame` as a [FrameScheduler].
///
/// `callback` holds the frame closure so that it can request itself again.
/// Storing it inside an `Option` allows us to create the `Closure` first and
/// then hand it a clone of the scheduler it lives in.
#[derive(Clone)]
pub struct AnimationFrames {
    window: Window,
    callback: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationFrames {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
        }
    }

    /// Sets the closure every request will call.
    pub fn install(&self, callback: Closure<dyn FnMut()>) {
        *self.callback.borrow_mut() = Some(callback);
    }
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Result<FrameHandle> {
        let callback = self.callback.borrow();
        let callback = callback
            .as_ref()
            .ok_or_else(|| Error::Schedule("no frame callback installed".into()))?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map(FrameHandle::new)
            .map_err(|e| Error::Schedule(format!("{e:?}")))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.raw()) {
            log::warn!("cancel_animation_frame failed: {e:?}");
        }
    }
}

fn on_click(target: &Element, handler: impl FnMut() + 'static) -> Result<()> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Wires the page: canvas sizing, theme toggle, visualizer toggle, palette
/// refresh, the sample interval and the animation loop.
pub fn start() -> Result<()> {
    let window = window().ok_or_else(|| Error::Unsupported("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| Error::Unsupported("no document".into()))?;
    let config = dom::load_config(&document)?;

    let canvas = dom::element_by_id(&document, &config.canvas_id)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::MissingElement(format!("#{} is not a canvas", config.canvas_id)))?;
    let surface = Canvas2dSurface::new(canvas)?;
    surface.fit_to_window()?;

    // Resize canvas to fit window
    let resize_closure = {
        let surface = surface.clone();
        Closure::wrap(Box::new(move || {
            if let Err(e) = surface.fit_to_window() {
                log::warn!("resize failed: {e}");
            }
        }) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    resize_closure.forget();

    // Theme
    let theme_button = dom::element_by_id(&document, &config.theme_toggle_id)?;
    let root = document
        .document_element()
        .ok_or_else(|| Error::MissingElement("document element".into()))?;
    let mut theme_target = DocumentTheme::new(root, theme_button.clone());
    let mut theme = ThemeController::init(
        LocalStore::open(&window),
        config.storage_key.clone(),
        &mut theme_target,
    );
    on_click(&theme_button, move || {
        theme.toggle(&mut theme_target);
    })?;

    let visualizer_button = dom::element_by_id(&document, &config.visualizer_toggle_id)?;
    let palette_control = dom::query(&document, &config.palette_refresh_selector)?;

    let session = Rc::new(RefCell::new(Session::simulated(
        config.clone(),
        Rng::from_entropy(),
    )));
    let mut frames = AnimationFrames::new(window.clone());

    // Animation loop
    {
        let session = session.clone();
        let mut scheduler = frames.clone();
        let mut surface = surface.clone();
        frames.install(Closure::wrap(Box::new(move || {
            if let Err(e) = session
                .borrow_mut()
                .render_frame(&mut scheduler, &mut surface)
            {
                log::error!("frame failed: {e}");
            }
        }) as Box<dyn FnMut()>));
    }

    // Visualizer toggle
    visualizer_button.set_text_content(Some(session.borrow().state().label()));
    {
        let session = session.clone();
        let mut scheduler = frames.clone();
        let mut surface = surface.clone();
        let button = visualizer_button.clone();
        on_click(&visualizer_button, move || {
            match session
                .borrow_mut()
                .toggle_visualizer(&mut scheduler, &mut surface)
            {
                Ok(state) => button.set_text_content(Some(state.label())),
                Err(e) => log::error!("visualizer toggle failed: {e}"),
            }
        })?;
    }

    {
        let session = session.clone();
        on_click(&palette_control, move || {
            session.borrow_mut().refresh_palette();
        })?;
    }

    // Simulated samples
    let tick = {
        let session = session.clone();
        Closure::wrap(Box::new(move || {
            session.borrow_mut().tick();
        }) as Box<dyn FnMut()>)
    };
    let interval = config.interval_ms().ok_or_else(|| {
        Error::Config(format!(
            "sample_interval_ms {} out of timer range",
            config.sample_interval_ms
        ))
    })?;
    window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        interval,
    )?;
    tick.forget();

    session.borrow_mut().start(&mut frames)?;
    log::info!("visualizer running ({} bins)", config.bin_count());
    Ok(())
}
