use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Warning,
    Pending,
    Arrow,
    Farm,
    Flock,
    Pen,
    Breeding,
    Health,
    Feed,
    Sale,
    Check,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Farm) => theme::icons::FARM,
            (true, Icon::Flock) => theme::icons::FLOCK,
            (true, Icon::Pen) => theme::icons::PEN,
            (true, Icon::Breeding) => theme::icons::BREEDING,
            (true, Icon::Health) => theme::icons::HEALTH,
            (true, Icon::Feed) => theme::icons::FEED,
            (true, Icon::Sale) => theme::icons::SALE,
            (true, Icon::Check) => theme::icons::CHECK,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Farm) => theme::icons_ascii::FARM,
            (false, Icon::Flock) => theme::icons_ascii::FLOCK,
            (false, Icon::Pen) => theme::icons_ascii::PEN,
            (false, Icon::Breeding) => theme::icons_ascii::BREEDING,
            (false, Icon::Health) => theme::icons_ascii::HEALTH,
            (false, Icon::Feed) => theme::icons_ascii::FEED,
            (false, Icon::Sale) => theme::icons_ascii::SALE,
            (false, Icon::Check) => theme::icons_ascii::CHECK,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Warning => theme::colors::WARNING,
            Icon::Pending | Icon::Arrow => theme::colors::DIM,
            Icon::Farm
            | Icon::Flock
            | Icon::Pen
            | Icon::Breeding
            | Icon::Health
            | Icon::Feed
            | Icon::Sale
            | Icon::Check => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
