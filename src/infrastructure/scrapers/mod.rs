use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};

pub(crate) mod ffhb;

/// The federation pages ship their data as JSON in the `attributes`
/// attribute of `smartfire-component` elements, one component per block.
pub struct Selectors {
    pub match_list: Selector,
    pub referees: Selector,
    pub gym: Selector,
    pub score: Selector,
}

impl Selectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            match_list: component("competitions---rencontre-list")?,
            referees: component("competitions---rencontre-arbitres")?,
            gym: component("competitions---rencontre-salle")?,
            score: component("score")?,
        })
    }
}

fn component(name: &str) -> Result<Selector> {
    Selector::parse(&format!("smartfire-component[name='{}']", name))
        .map_err(|e| ScrapeError::Selector(e.to_string()))
}

/// JSON payload of the first component matching `selector`, or `""`.
pub fn component_attributes<'a>(document: &'a Html, selector: &Selector) -> &'a str {
    document
        .select(selector)
        .next()
        .and_then(|element: ElementRef<'a>| element.value().attr("attributes"))
        .unwrap_or_default()
}
