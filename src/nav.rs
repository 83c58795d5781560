/// Extra offset added to the scroll position so a section counts as active
/// slightly before its top reaches the fixed header.
pub const SCROLL_OFFSET: f64 = 100.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Technologies,
    Contact,
}

impl Section {
    /// Declaration order. Earlier sections win when bounds overlap.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Technologies,
        Section::Contact,
    ];

    /// Element id of the section anchor.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "inicio",
            Section::About => "sobre-mi",
            Section::Experience => "experiencia",
            Section::Projects => "proyectos",
            Section::Technologies => "tecnologias",
            Section::Contact => "contacto",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Inicio",
            Section::About => "Sobre mí",
            Section::Experience => "Experiencia",
            Section::Projects => "Proyectos",
            Section::Technologies => "Tecnologías",
            Section::Contact => "Contacto",
        }
    }
}

/// Vertical extent of a rendered section, in document pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        self.top <= position && position < self.top + self.height
    }
}

/// First section in declaration order containing `scroll_y + SCROLL_OFFSET`.
/// Sections `bounds` cannot measure are skipped.
pub fn section_at<F>(scroll_y: f64, mut bounds: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    let position = scroll_y + SCROLL_OFFSET;
    Section::ALL
        .into_iter()
        .find(|s| bounds(*s).is_some_and(|b| b.contains(position)))
}

/// Highlighted navigation entry. Keeps the last match when the scroll
/// position falls outside every section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: Section,
}

impl ActiveSection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn on_scroll<F>(&mut self, scroll_y: f64, bounds: F) -> Section
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        if let Some(section) = section_at(scroll_y, bounds) {
            self.current = section;
        }
        self.current
    }
}

/// Overlay menu shown on narrow layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
