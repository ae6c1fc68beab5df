/// State of one page element the widget writes to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Selector the element is looked up by on the page.
    pub selector: String,
    pub text: String,
    pub title: Option<String>,
    pub href: Option<String>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub hidden: bool,
}

impl Element {
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }
}

/// The slots of the music section. `None` means the element is not on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetTargets {
    pub art: Option<Element>,
    pub artist: Option<Element>,
    pub title: Option<Element>,
    pub loading: Option<Element>,
    pub heading: Option<Element>,
}

impl WidgetTargets {
    /// The music section as the site's template lays it out.
    pub fn standard() -> Self {
        Self {
            art: Some(Element::new("#trackart")),
            artist: Some(Element::new("#trackartist")),
            title: Some(Element::new("#tracktitle")),
            loading: Some(Element::new(".loading-indicator").with_text("loading...")),
            heading: Some(Element::new(".music-section .title").with_text("listening to:")),
        }
    }

    pub fn show_loading(&mut self) {
        if let Some(loading) = self.loading.as_mut() {
            loading.hidden = false;
        }
    }

    /// Names of the required slots that are missing.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.art.is_none() {
            missing.push("art");
        }
        if self.artist.is_none() {
            missing.push("artist");
        }
        if self.title.is_none() {
            missing.push("title");
        }
        missing
    }
}
