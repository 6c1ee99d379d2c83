use flockbook::domain::entities::SaleRecord;

use super::{money, text_or_dash};
use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::table::{Align, Table};

pub struct SalesListView<'a> {
    sales: &'a [SaleRecord],
}

impl<'a> SalesListView<'a> {
    pub fn new(sales: &'a [SaleRecord]) -> Self {
        Self { sales }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let total: f64 = self.sales.iter().map(|s| s.total_amount).sum();
        let mut header = CommandHeader::new(Icon::Sale, "Sales");
        header.add("Sales", self.sales.len().to_string());
        header.add(
            "Revenue",
            ColoredText::success(money(total)).bold().render(supports_color),
        );
        let mut out = header.render(supports_color, supports_unicode);
        out.push('\n');

        if self.sales.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                ColoredText::dim("No sales recorded.").render(supports_color)
            ));
            return out;
        }

        let mut table = Table::new()
            .column("Date", Align::Left)
            .column("Sheep", Align::Left)
            .column("Customer", Align::Left)
            .column("Qty", Align::Right)
            .column("Unit", Align::Right)
            .column("Total", Align::Right)
            .column("Payment", Align::Left);
        for s in self.sales {
            table.add_row(vec![
                s.sale_date.to_string(),
                s.sheep_id.clone(),
                text_or_dash(&s.customer),
                s.quantity.to_string(),
                money(s.unit_price),
                money(s.total_amount),
                s.payment_method.to_string(),
            ]);
        }
        out.push_str(&table.render(supports_color, supports_unicode));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flockbook::domain::value_objects::PaymentMethod;

    #[test]
    fn revenue_sums_totals() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let a = SaleRecord::builder()
            .id("SL1")
            .sheep_id("E001")
            .sale_date(day)
            .unit_price(1200.0)
            .build()
            .unwrap();
        let b = SaleRecord::builder()
            .id("SL2")
            .sheep_id("E002")
            .sale_date(day)
            .quantity(2)
            .unit_price(800.5)
            .payment_method(PaymentMethod::Cash)
            .build()
            .unwrap();

        let rendered = SalesListView::new(&[a, b]).render(false, false);
        assert!(rendered.contains("Revenue: 2801.00"));
        assert!(rendered.contains("1601.00"));
        assert!(rendered.contains("Cash"));
    }
}
