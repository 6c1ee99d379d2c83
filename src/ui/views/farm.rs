use flockbook::domain::entities::FarmInfo;

use super::{date_or_dash, text_or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub struct FarmView<'a> {
    farm: &'a FarmInfo,
    location: &'a str,
}

impl<'a> FarmView<'a> {
    pub fn new(farm: &'a FarmInfo, location: &'a str) -> Self {
        Self { farm, location }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Farm, self.farm.name.as_str());
        header.add("Code", self.farm.id.as_str());
        header.add("Owner", text_or_dash(&self.farm.owner));
        header.add("Contact", text_or_dash(&self.farm.contact));
        header.add("Address", text_or_dash(&self.farm.address));
        header.add("Established", date_or_dash(self.farm.established_date));
        header.add("Notes", text_or_dash(&self.farm.notes));
        header.add("Data file", self.location);
        header.render(supports_color, supports_unicode)
    }
}
