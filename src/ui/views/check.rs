use flockbook::domain::services::IntegrityReport;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::primitives::icon::Icon;

pub struct CheckView<'a> {
    report: &'a IntegrityReport,
    location: &'a str,
}

impl<'a> CheckView<'a> {
    pub fn new(report: &'a IntegrityReport, location: &'a str) -> Self {
        Self { report, location }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut header = CommandHeader::new(Icon::Check, "Data check");
        header.add("Data file", self.location);
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.report.is_clean() {
            let mut summary = ResultSummary::success("No problems found");
            summary.add_stat("Issues", 0);
            out.push_str(&summary.render(supports_color, supports_unicode));
            return out;
        }

        let noun = if self.report.len() == 1 { "problem" } else { "problems" };
        let mut block = WarningBlock::new(format!("{} {} found", self.report.len(), noun));
        for issue in &self.report.issues {
            block.add_line(issue.describe());
        }
        out.push_str(&block.render(supports_color, supports_unicode));
        out
    }
}
