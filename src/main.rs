//! Canvas Life entry point
//!
//! Handles platform-specific initialization and runs the animation loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlInputElement, KeyboardEvent, MouseEvent, TouchEvent};

    use canvas_life::input::{Command, PointerAction, StrokeTracker, command_for_key};
    use canvas_life::platform::{Clock, LocalStorage, MemoryStorage, MonotonicClock};
    use canvas_life::renderer::{CanvasLayout, Palette, RenderState, shapes};
    use canvas_life::{Error, ErrorKind, Session, Settings, SnapshotStore};

    /// Storage behind the snapshot store: LocalStorage, or memory if the
    /// browser refuses it (private mode, disabled storage)
    enum Backend {
        Local(LocalStorage),
        Memory(MemoryStorage),
    }

    impl canvas_life::platform::KeyValueStorage for Backend {
        fn get_item(&self, key: &str) -> canvas_life::Result<Option<String>> {
            match self {
                Backend::Local(s) => s.get_item(key),
                Backend::Memory(s) => s.get_item(key),
            }
        }

        fn set_item(&mut self, key: &str, value: &str) -> canvas_life::Result<()> {
            match self {
                Backend::Local(s) => s.set_item(key, value),
                Backend::Memory(s) => s.set_item(key, value),
            }
        }

        fn remove_item(&mut self, key: &str) -> canvas_life::Result<()> {
            match self {
                Backend::Local(s) => s.remove_item(key),
                Backend::Memory(s) => s.remove_item(key),
            }
        }
    }

    fn open_backend() -> Backend {
        match LocalStorage::open() {
            Ok(storage) => Backend::Local(storage),
            Err(e) => {
                log::warn!("{} - saved boards will not survive a reload", e);
                Backend::Memory(MemoryStorage::new())
            }
        }
    }

    /// Application instance holding all state
    struct App {
        session: Session,
        store: SnapshotStore<Backend>,
        settings: Settings,
        settings_storage: Backend,
        render_state: Option<RenderState>,
        layout: CanvasLayout,
        palette: Palette,
        rng: Pcg32,
        stroke: StrokeTracker,
        clock: MonotonicClock,
        /// Pending requestAnimationFrame id
        frame_handle: Option<i32>,
        /// Pending toast hide timer id
        toast_timer: Option<i32>,
    }

    impl App {
        /// Redraw the board and HUD
        fn redraw(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                let vertices = shapes::board_quads(
                    self.session.grid(),
                    &self.layout,
                    &self.palette,
                    self.settings.grid_lines,
                );
                match render_state.render(&vertices, self.palette.background) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        let (w, h) = render_state.size;
                        let view = render_state.view_size;
                        render_state.resize(w, h, view);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
            self.update_hud();
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = document() else {
                return;
            };

            if let Some(el) = document.get_element_by_id("generation") {
                el.set_text_content(Some(&self.session.generation().to_string()));
            }
            if let Some(el) = document.get_element_by_id("population") {
                el.set_text_content(Some(&self.session.grid().population().to_string()));
            }
            if let Some(el) = document.get_element_by_id("play-btn") {
                let label = if self.session.is_running() { "Pause" } else { "Play" };
                el.set_text_content(Some(label));
            }
        }

        fn save_settings(&mut self) {
            if let Err(e) = self.settings.save(&mut self.settings_storage) {
                log::warn!("Could not save settings: {}", e);
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Canvas Life starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No #canvas element");
            return;
        };

        let settings_storage = open_backend();
        let settings = Settings::load(&settings_storage);

        let (css_w, css_h, device_w, device_h) = canvas_size(&window, &canvas);
        let layout = CanvasLayout::new(css_w, css_h, settings.cell_size);
        let (cols, rows) = layout.grid_dimensions();

        let store = match SnapshotStore::open(open_backend()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Saved boards unreadable, starting empty: {}", e);
                show_toast_now(&document, &format!("Saved boards unreadable: {}", e), true);
                SnapshotStore::empty(open_backend())
            }
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App {
            session: Session::new(cols, rows, settings.speed),
            store,
            settings,
            settings_storage,
            render_state: None,
            layout,
            palette: Palette::default(),
            rng: Pcg32::seed_from_u64(seed),
            stroke: StrokeTracker::new(),
            clock: MonotonicClock::new(),
            frame_handle: None,
            toast_timer: None,
        }));

        log::info!("Board {}x{} (seed {})", cols, rows, seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        match instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone())) {
            Ok(surface) => {
                match instance
                    .request_adapter(&wgpu::RequestAdapterOptions {
                        power_preference: wgpu::PowerPreference::LowPower,
                        compatible_surface: Some(&surface),
                        force_fallback_adapter: false,
                    })
                    .await
                {
                    Ok(adapter) => {
                        log::info!("Using adapter: {:?}", adapter.get_info().name);
                        match RenderState::new(surface, &adapter, device_w, device_h, (css_w, css_h))
                            .await
                        {
                            Ok(render_state) => app.borrow_mut().render_state = Some(render_state),
                            Err(e) => log::error!("Failed to create device: {}", e),
                        }
                    }
                    Err(e) => log::error!("No suitable GPU adapter: {}", e),
                }
            }
            Err(e) => log::error!("Failed to create surface: {}", e),
        }

        {
            let mut a = app.borrow_mut();
            let density = a.settings.random_density;
            let App { session, rng, .. } = &mut *a;
            session.randomize(rng, density);
        }

        setup_controls(&document, app.clone());
        setup_pointer_handlers(&canvas, app.clone());
        setup_keyboard(&window, app.clone());
        setup_resize(&window, &canvas, app.clone());

        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        refresh_saved_list(&app);
        app.borrow_mut().redraw();

        log::info!("Canvas Life ready");
    }

    /// Canvas size in CSS pixels and device pixels; sets the backing store size
    fn canvas_size(window: &web_sys::Window, canvas: &HtmlCanvasElement) -> (f32, f32, u32, u32) {
        let dpr = window.device_pixel_ratio();
        let css_w = canvas.client_width().max(1);
        let css_h = canvas.client_height().max(1);
        let device_w = (css_w as f64 * dpr) as u32;
        let device_h = (css_h as f64 * dpr) as u32;
        canvas.set_width(device_w);
        canvas.set_height(device_h);
        (css_w as f32, css_h as f32, device_w, device_h)
    }

    // === Scheduling ===

    fn request_frame(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let app_clone = app.clone();
        let closure = Closure::once(move |time: f64| {
            on_frame(app_clone, time);
        });
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(handle) => app.borrow_mut().frame_handle = Some(handle),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
        closure.forget();
    }

    fn on_frame(app: Rc<RefCell<App>>, time: f64) {
        let rearm = {
            let mut a = app.borrow_mut();
            a.frame_handle = None;
            let outcome = a.session.frame(time);
            if outcome.stepped {
                a.redraw();
            }
            outcome.rearm
        };

        if rearm {
            request_frame(&app);
        }
    }

    fn start(app: &Rc<RefCell<App>>) {
        let armed = {
            let mut a = app.borrow_mut();
            let now = a.clock.now_ms();
            a.session.start(now);
            a.update_hud();
            a.frame_handle.is_some()
        };
        if !armed {
            request_frame(app);
        }
    }

    /// Stop the loop and drop any pending frame callback
    fn pause(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        a.session.pause();
        if let Some(handle) = a.frame_handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
        a.update_hud();
    }

    fn run_command(app: &Rc<RefCell<App>>, command: Command) {
        match command {
            Command::ToggleRunning => {
                if app.borrow().session.is_running() {
                    pause(app);
                } else {
                    start(app);
                }
            }
            Command::Step => {
                pause(app);
                let mut a = app.borrow_mut();
                a.session.step_once();
                a.redraw();
            }
            Command::Clear => {
                pause(app);
                let mut a = app.borrow_mut();
                a.session.clear();
                a.redraw();
                drop(a);
                show_toast(app, "Board cleared", false);
            }
            Command::Randomize => {
                pause(app);
                let mut a = app.borrow_mut();
                let density = a.settings.random_density;
                let App { session, rng, .. } = &mut *a;
                session.randomize(rng, density);
                a.redraw();
                drop(a);
                show_toast(app, "Board randomized", false);
            }
        }
    }

    // === Saved boards ===

    fn snapshot_name_input() -> Option<HtmlInputElement> {
        document()?
            .get_element_by_id("snapshot-name")?
            .dyn_into::<HtmlInputElement>()
            .ok()
    }

    fn report_error(app: &Rc<RefCell<App>>, action: &str, err: &Error) {
        match err.kind() {
            ErrorKind::Validation | ErrorKind::NotFound => log::info!("{} rejected: {}", action, err),
            ErrorKind::Storage => log::error!("{} failed: {}", action, err),
        }
        show_toast(app, &err.to_string(), true);
    }

    fn save_snapshot(app: &Rc<RefCell<App>>) {
        let name = snapshot_name_input().map(|i| i.value()).unwrap_or_default();
        let result = {
            let mut a = app.borrow_mut();
            let App { session, store, .. } = &mut *a;
            store.save(&name, session.grid(), session.generation())
        };
        match result {
            Ok(()) => {
                show_toast(app, &format!("Saved \"{}\"", name.trim()), false);
                refresh_saved_list(app);
            }
            Err(e) => report_error(app, "Save", &e),
        }
    }

    fn load_snapshot(app: &Rc<RefCell<App>>, name: &str) {
        pause(app);
        let result = {
            let mut a = app.borrow_mut();
            let App { session, store, .. } = &mut *a;
            store.load_into(name, session)
        };
        match result {
            Ok(()) => {
                app.borrow_mut().redraw();
                show_toast(app, &format!("Loaded \"{}\"", name.trim()), false);
            }
            Err(e) => report_error(app, "Load", &e),
        }
    }

    fn delete_snapshot(app: &Rc<RefCell<App>>, name: &str) {
        let result = app.borrow_mut().store.delete(name);
        match result {
            Ok(()) => {
                show_toast(app, &format!("Deleted \"{}\"", name.trim()), false);
                refresh_saved_list(app);
            }
            Err(e) => report_error(app, "Delete", &e),
        }
    }

    /// Rebuild the saved-boards list, newest first
    fn refresh_saved_list(app: &Rc<RefCell<App>>) {
        let Some(document) = document() else {
            return;
        };
        let Some(list) = document.get_element_by_id("saved-list") else {
            return;
        };
        list.set_inner_html("");

        let metas = app.borrow().store.list();
        for meta in metas {
            let Ok(item) = document.create_element("li") else {
                continue;
            };
            let Ok(label) = document.create_element("span") else {
                continue;
            };
            label.set_text_content(Some(&format!(
                "{} - gen {}, {}x{}, {}",
                meta.name,
                meta.generation,
                meta.width,
                meta.height,
                meta.date.format("%Y-%m-%d %H:%M")
            )));
            let _ = item.append_child(&label);

            for (text, is_delete) in [("Load", false), ("Delete", true)] {
                let Ok(button) = document.create_element("button") else {
                    continue;
                };
                button.set_text_content(Some(text));
                let app = app.clone();
                let name = meta.name.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    if is_delete {
                        delete_snapshot(&app, &name);
                    } else {
                        load_snapshot(&app, &name);
                    }
                });
                let _ = button
                    .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
                let _ = item.append_child(&button);
            }

            let _ = list.append_child(&item);
        }
    }

    // === Notifications ===

    fn show_toast_now(document: &Document, message: &str, is_error: bool) {
        if let Some(el) = document.get_element_by_id("toast") {
            el.set_text_content(Some(message));
            let class = if is_error { "toast error show" } else { "toast show" };
            let _ = el.set_attribute("class", class);
        }
    }

    /// Show a transient notification, replacing any visible one
    fn show_toast(app: &Rc<RefCell<App>>, message: &str, is_error: bool) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        show_toast_now(&document, message, is_error);

        if let Some(timer) = app.borrow_mut().toast_timer.take() {
            window.clear_timeout_with_handle(timer);
        }
        let app_clone = app.clone();
        let closure = Closure::once(move || {
            app_clone.borrow_mut().toast_timer = None;
            if let Some(el) = document.get_element_by_id("toast") {
                let _ = el.set_attribute("class", "toast");
            }
        });
        if let Ok(timer) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            2500,
        ) {
            app.borrow_mut().toast_timer = Some(timer);
        }
        closure.forget();
    }

    // === DOM wiring ===

    fn on_click(doc: &Document, id: &str, app: Rc<RefCell<App>>, f: fn(&Rc<RefCell<App>>)) {
        if let Some(btn) = doc.get_element_by_id(id) {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| f(&app));
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_controls(doc: &Document, app: Rc<RefCell<App>>) {
        on_click(doc, "play-btn", app.clone(), |app| {
            run_command(app, Command::ToggleRunning)
        });
        on_click(doc, "step-btn", app.clone(), |app| run_command(app, Command::Step));
        on_click(doc, "clear-btn", app.clone(), |app| run_command(app, Command::Clear));
        on_click(doc, "random-btn", app.clone(), |app| {
            run_command(app, Command::Randomize)
        });
        on_click(doc, "save-btn", app.clone(), save_snapshot);
        on_click(doc, "load-btn", app.clone(), |app| {
            let name = snapshot_name_input().map(|i| i.value()).unwrap_or_default();
            load_snapshot(app, &name);
        });

        // Speed selector (1-10)
        if let Some(input) = doc
            .get_element_by_id("speed")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            let speed = app.borrow().session.speed();
            input.set_value(&speed.to_string());
            if let Some(el) = doc.get_element_by_id("speed-value") {
                el.set_text_content(Some(&format!("{}x", speed)));
            }
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Ok(speed) = input_clone.value().parse::<u8>() else {
                    return;
                };
                let mut a = app.borrow_mut();
                a.session.set_speed(speed);
                a.settings.speed = a.session.speed();
                a.save_settings();
                if let Some(el) = document().and_then(|d| d.get_element_by_id("speed-value")) {
                    el.set_text_content(Some(&format!("{}x", a.session.speed())));
                }
            });
            let _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn apply_pointer(app: &Rc<RefCell<App>>, hit: Option<((usize, usize), PointerAction)>) {
        let Some(((x, y), action)) = hit else {
            return;
        };
        let mut a = app.borrow_mut();
        let changed = match action {
            PointerAction::Toggle => a.session.toggle_cell(x, y),
            PointerAction::Paint => a.session.paint_cell(x, y),
        };
        if changed {
            a.redraw();
        }
    }

    /// Touch position relative to the canvas, in CSS pixels
    fn touch_cell(app: &Rc<RefCell<App>>, canvas: &HtmlCanvasElement, event: &TouchEvent) -> Option<(usize, usize)> {
        let touch = event.touches().get(0)?;
        let rect = canvas.get_bounding_client_rect();
        let x = touch.client_x() as f32 - rect.left() as f32;
        let y = touch.client_y() as f32 - rect.top() as f32;
        app.borrow().layout.cell_at(x, y)
    }

    fn setup_pointer_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse down - toggle
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let cell = app
                    .borrow()
                    .layout
                    .cell_at(event.offset_x() as f32, event.offset_y() as f32);
                let hit = app.borrow_mut().stroke.press(cell);
                apply_pointer(&app, hit);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - paint while dragging
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                if !app.borrow().stroke.is_active() {
                    return;
                }
                let cell = app
                    .borrow()
                    .layout
                    .cell_at(event.offset_x() as f32, event.offset_y() as f32);
                let hit = app.borrow_mut().stroke.drag(cell);
                apply_pointer(&app, hit);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start - paint
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let cell = touch_cell(&app, &canvas_clone, &event);
                let hit = app.borrow_mut().stroke.touch(cell);
                apply_pointer(&app, hit);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move - paint
        {
            let app = app.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let cell = touch_cell(&app, &canvas_clone, &event);
                let hit = app.borrow_mut().stroke.drag(cell);
                apply_pointer(&app, hit);
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // End of any stroke
        for event_name in ["mouseup", "mouseleave", "touchend", "touchcancel"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                app.borrow_mut().stroke.release();
            });
            let _ = canvas
                .add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(window: &web_sys::Window, app: Rc<RefCell<App>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            // Typing a snapshot name must not drive the board
            let typing = event
                .target()
                .is_some_and(|t| t.dyn_into::<HtmlInputElement>().is_ok());
            if typing || event.ctrl_key() || event.meta_key() || event.alt_key() {
                return;
            }
            if let Some(command) = command_for_key(&event.key()) {
                event.prevent_default();
                run_command(&app, command);
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(window: &web_sys::Window, canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (css_w, css_h, device_w, device_h) = canvas_size(&window, &canvas);
            let cell_size = app.borrow().settings.cell_size;
            let layout = CanvasLayout::new(css_w, css_h, cell_size);
            let (cols, rows) = layout.grid_dimensions();

            if app.borrow().session.grid().dimensions() != (cols, rows) {
                pause(&app);
            }
            let mut a = app.borrow_mut();
            a.layout = layout;
            a.stroke.release();
            a.session.resize(cols, rows);
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(device_w, device_h, (css_w, css_h));
            }
            a.redraw();
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Canvas Life (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the web version");

    if let Err(e) = run_headless() {
        log::error!("Headless run failed: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Run a seeded board for a few simulated seconds and print it
#[cfg(not(target_arch = "wasm32"))]
fn run_headless() -> canvas_life::Result<()> {
    use canvas_life::consts::{DEFAULT_RANDOM_DENSITY, DEFAULT_SPEED};
    use canvas_life::platform::{Clock, ManualClock, MemoryStorage};
    use canvas_life::{Session, SnapshotStore};
    use rand::SeedableRng;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const SECONDS: u32 = 3;

    let mut rng = rand_pcg::Pcg32::seed_from_u64(0x11fe);
    let mut session = Session::new(48, 20, DEFAULT_SPEED);
    session.randomize(&mut rng, DEFAULT_RANDOM_DENSITY);

    let clock = ManualClock::new(0.0);
    session.start(clock.now_ms());
    for _ in 0..SECONDS * 60 {
        clock.advance(FRAME_MS);
        if session.frame(clock.now_ms()).stepped {
            log::info!(
                "Generation {}: {} alive",
                session.generation(),
                session.grid().population()
            );
        }
    }
    session.pause();

    let mut store = SnapshotStore::open(MemoryStorage::new())?;
    store.save("headless", session.grid(), session.generation())?;
    for meta in store.list() {
        log::info!(
            "Saved '{}' at generation {} ({} alive)",
            meta.name,
            meta.generation,
            meta.population
        );
    }

    println!("Generation {}", session.generation());
    for row in session.grid().to_rows() {
        let line: String = row
            .iter()
            .map(|&cell| if cell == 1 { '#' } else { '.' })
            .collect();
        println!("{}", line);
    }
    Ok(())
}
