//! Child panel handles.
//!
//! The host owns the real views; the sliding menu only needs to write a
//! layout width and a draw transform and, for routing touches, to know a
//! panel's size and pointer handler. A [`Panel`] is a cheap shared handle to
//! exactly that. Panels never point back at the menu that holds them.

use slidemenu_foundation::PointerEvent;
use slidemenu_ui_graphics::{GraphicsLayer, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PANEL_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl PanelId {
    pub fn get(self) -> u64 {
        self.0
    }
}

type PointerHandler = Rc<dyn Fn(&PointerEvent) -> bool>;

#[derive(Clone)]
pub struct Panel {
    inner: Rc<PanelInner>,
}

struct PanelInner {
    id: PanelId,
    label: String,
    width: Cell<i32>,
    height: Cell<i32>,
    layer: Cell<GraphicsLayer>,
    pointer_handler: RefCell<Option<PointerHandler>>,
}

impl Panel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(PanelInner {
                id: PanelId(NEXT_PANEL_ID.fetch_add(1, Ordering::Relaxed)),
                label: label.into(),
                width: Cell::new(0),
                height: Cell::new(0),
                layer: Cell::new(GraphicsLayer::IDENTITY),
                pointer_handler: RefCell::new(None),
            }),
        }
    }

    pub fn with_height(self, height: i32) -> Self {
        self.set_height(height);
        self
    }

    pub fn id(&self) -> PanelId {
        self.inner.id
    }

    pub fn label(&self) -> &str {
        &self.inner.label
    }

    pub fn width(&self) -> i32 {
        self.inner.width.get()
    }

    pub fn set_width(&self, width: i32) {
        self.inner.width.set(width);
    }

    pub fn height(&self) -> i32 {
        self.inner.height.get()
    }

    pub fn set_height(&self, height: i32) {
        self.inner.height.set(height);
    }

    pub fn size(&self) -> Size {
        Size::new(self.width() as f32, self.height() as f32)
    }

    pub fn graphics_layer(&self) -> GraphicsLayer {
        self.inner.layer.get()
    }

    pub fn set_graphics_layer(&self, layer: GraphicsLayer) {
        self.inner.layer.set(layer);
    }

    /// Install the handler that receives touches routed to this panel. It
    /// returns whether it handled the event.
    pub fn set_pointer_handler(&self, handler: impl Fn(&PointerEvent) -> bool + 'static) {
        *self.inner.pointer_handler.borrow_mut() = Some(Rc::new(handler));
    }

    /// Deliver an event to the panel's handler. Panels without a handler do
    /// not handle anything.
    pub fn dispatch_pointer(&self, event: &PointerEvent) -> bool {
        let handler = self.inner.pointer_handler.borrow().clone();
        match handler {
            Some(handler) => handler(event),
            None => false,
        }
    }

    pub fn ptr_eq(&self, other: &Panel) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Panel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.inner.id)
            .field("label", &self.inner.label)
            .field("width", &self.inner.width.get())
            .field("height", &self.inner.height.get())
            .field("layer", &self.inner.layer.get())
            .finish()
    }
}
