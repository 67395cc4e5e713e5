//! Stylesheets shared by every mounted input, keyed by title.
//!
//! Mounting registers a sheet; a second mount with the same title joins the
//! existing sheet as another holder instead of adding a copy. The first holder
//! renders the sheet. When it unmounts, the next holder takes over, and the
//! sheet is dropped once no mounted input holds it anymore.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Holder(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    pub title: String,
    pub css: String,
    holders: Vec<Holder>,
}

impl StyleSheet {
    /// The holder responsible for rendering the sheet.
    pub fn owner(&self) -> Option<Holder> {
        self.holders.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registration {
    pub holder: Holder,
    /// `false` when a sheet with the same title was already present.
    pub injected: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleRegistry {
    sheets: Vec<StyleSheet>,
    next_holder: u64,
}

impl StyleRegistry {
    /// Adds a holder for `title`, injecting `css` only if no sheet with that
    /// exact title exists. The existing sheet's rules are kept.
    pub fn register(&mut self, title: impl Into<String>, css: impl Into<String>) -> Registration {
        let title = title.into();
        let holder = Holder(self.next_holder);
        self.next_holder += 1;

        let injected = match self.sheets.iter_mut().find(|sheet| sheet.title == title) {
            Some(sheet) => {
                sheet.holders.push(holder);
                tracing::debug!(%title, holders = sheet.holders.len(), "stylesheet already present");
                false
            }
            None => {
                tracing::debug!(%title, "injecting stylesheet");
                self.sheets.push(StyleSheet { title, css: css.into(), holders: vec![holder] });
                true
            }
        };

        Registration { holder, injected }
    }

    /// Returns `true` if this was the last holder and the sheet was removed.
    pub fn release(&mut self, title: &str, holder: Holder) -> bool {
        let Some(index) = self.sheets.iter().position(|sheet| sheet.title == title) else {
            return false;
        };

        let sheet = &mut self.sheets[index];
        sheet.holders.retain(|held| *held != holder);
        if !sheet.holders.is_empty() {
            return false;
        }

        tracing::debug!(title, "removing stylesheet");
        self.sheets.remove(index);
        true
    }

    /// The rules `holder` has to render for `title`, if it owns that sheet.
    pub fn owned_css(&self, title: &str, holder: Holder) -> Option<&str> {
        self.sheets
            .iter()
            .find(|sheet| sheet.title == title && sheet.owner() == Some(holder))
            .map(|sheet| sheet.css.as_str())
    }

    pub fn sheets(&self) -> impl Iterator<Item = &StyleSheet> {
        self.sheets.iter()
    }
}
