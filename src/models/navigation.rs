/// Horizontal swipe distance (px, leftwards) that closes the mobile menu.
pub const SWIPE_CLOSE_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuEvent {
    Toggle,
    /// Click somewhere on the page; `inside_menu` is true when it landed on
    /// the menu itself or on the burger button.
    DocumentClick { inside_menu: bool },
    Escape,
    LinkFollowed,
    Resize { width: u32 },
    Swipe { dx: f64, dy: f64 },
}

impl MenuState {
    pub fn apply(self, event: MenuEvent, breakpoint_px: u32) -> Self {
        let open = match event {
            MenuEvent::Toggle => !self.open,
            MenuEvent::DocumentClick { inside_menu } => self.open && inside_menu,
            MenuEvent::Escape | MenuEvent::LinkFollowed => false,
            MenuEvent::Resize { width } => self.open && width <= breakpoint_px,
            MenuEvent::Swipe { dx, dy } => {
                let closing = dx < -SWIPE_CLOSE_DISTANCE && dx.abs() > dy.abs();
                self.open && !closing
            }
        };
        Self { open }
    }
}

/// Tracks which modal dialog, if any, is currently shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModalState {
    pub open: Option<String>,
}

impl ModalState {
    pub fn opened(self, modal_id: &str) -> Self {
        Self {
            open: Some(modal_id.to_string()),
        }
    }

    pub fn closed(self, modal_id: &str) -> Self {
        match self.open {
            Some(ref id) if id == modal_id => Self { open: None },
            _ => self,
        }
    }

    pub fn is_open(&self, modal_id: &str) -> bool {
        self.open.as_deref() == Some(modal_id)
    }
}

/// A navigation link as it appears in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub page: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    Modal(&'static str),
    Section(String),
}

impl NavLink {
    pub fn anchor(href: &str) -> Self {
        Self {
            href: href.to_string(),
            page: None,
        }
    }

    pub fn page(page: &str) -> Self {
        Self {
            href: "#".to_string(),
            page: Some(page.to_string()),
        }
    }

    pub fn target(&self) -> Option<NavTarget> {
        if let Some(page) = self.page.as_deref() {
            return match page {
                "portfolio" => Some(NavTarget::Modal("portfolioModal")),
                "blog" => Some(NavTarget::Modal("blogModal")),
                _ => None,
            };
        }

        self.href
            .strip_prefix('#')
            .filter(|id| !id.is_empty())
            .map(|id| NavTarget::Section(id.to_string()))
    }
}
