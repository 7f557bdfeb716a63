//! Presentation helpers for the monthly timesheet.
//!
//! The core returns raw decimals; this module applies the fixed Brazilian
//! Real currency convention (`R$ 1.234,56`) and renders the semicolon
//! separated CSV report.

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::calculation::round_money;
use crate::models::{TimesheetSummary, WorkPeriod};

const CSV_HEADER: &str =
    "Data;Dia;Entrada1;Saida1;Entrada2;Saida2;Trabalhado;ExtraBanco;ExtraPaga;Falta";

/// Byte order mark so spreadsheet tools detect UTF-8.
const UTF8_BOM: &str = "\u{FEFF}";

/// Formats an amount as Brazilian Real with two decimals.
///
/// # Examples
///
/// ```
/// use hr_overtime::export::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(123456, 2)), "R$ 1.234,56");
/// assert_eq!(format_currency(Decimal::from(10)), "R$ 10,00");
/// ```
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_money(value);
    let text = rounded.abs().to_string();
    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, fraction)
}

/// Upper-case Portuguese name of a weekday, as printed on the report.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "DOMINGO",
        Weekday::Mon => "SEGUNDA",
        Weekday::Tue => "TERÇA",
        Weekday::Wed => "QUARTA",
        Weekday::Thu => "QUINTA",
        Weekday::Fri => "SEXTA",
        Weekday::Sat => "SÁBADO",
    }
}

/// File name offered for download, e.g. `controle_horas_1_2026.csv`.
pub fn csv_file_name(summary: &TimesheetSummary) -> String {
    format!("controle_horas_{}_{}.csv", summary.month, summary.year)
}

fn hours(value: Decimal) -> String {
    round_money(value).to_string()
}

fn clock(period: Option<&WorkPeriod>) -> (String, String) {
    match period {
        Some(p) => (
            p.start.format("%H:%M").to_string(),
            p.end.format("%H:%M").to_string(),
        ),
        None => (String::new(), String::new()),
    }
}

/// Renders the timesheet as a semicolon-separated CSV document.
///
/// One row per day (only the first two periods of a day have columns),
/// followed by a `RESUMO` block with the month totals.
pub fn timesheet_csv(summary: &TimesheetSummary) -> String {
    let mut csv = String::from(UTF8_BOM);
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for day in &summary.days {
        let (in1, out1) = clock(day.periods.first());
        let (in2, out2) = clock(day.periods.get(1));
        let row = [
            day.date.format("%d/%m/%Y").to_string(),
            weekday_label(day.date.weekday()).to_string(),
            in1,
            out1,
            in2,
            out2,
            hours(day.worked_hours),
            hours(day.banked_overtime),
            hours(day.paid_overtime),
            hours(day.shortfall_hours),
        ];
        csv.push_str(&row.join(";"));
        csv.push('\n');
    }

    let totals = &summary.totals;
    let summary_rows = [
        ("Total Horas Trabalhadas", format!("{} h", hours(totals.worked_hours))),
        ("Horas Esperadas", format!("{} h", hours(totals.expected_hours))),
        ("Extras Diárias (Banco)", format!("{} h", hours(totals.banked_overtime_hours))),
        ("Extras Semanais (Pagas)", format!("{} h", hours(totals.paid_overtime_hours))),
        ("Horas Faltantes", format!("{} h", hours(totals.shortfall_hours))),
        ("Valor Hora", format_currency(totals.hourly_rate)),
        ("Valor Extras", format_currency(totals.overtime_pay)),
        ("Descontos", format_currency(totals.deductions)),
        ("Salário Proporcional", format_currency(totals.proportional_salary)),
        ("Total Líquido", format_currency(totals.net_total)),
    ];

    csv.push_str("\nRESUMO\n");
    for (label, value) in summary_rows {
        csv.push_str(label);
        csv.push(';');
        csv.push_str(&value);
        csv.push('\n');
    }

    csv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_timesheet, standard_schedule};
    use crate::config::TimesheetConfig;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn january_summary() -> TimesheetSummary {
        let config = TimesheetConfig::default();
        let days = standard_schedule(2026, 1, &config).unwrap();
        compute_timesheet(2026, 1, dec("2200"), &days, &config).unwrap()
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(Decimal::ZERO), "R$ 0,00");
        assert_eq!(format_currency(dec("0.5")), "R$ 0,50");
        assert_eq!(format_currency(dec("999.999")), "R$ 1.000,00");
    }

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(dec("1234567.891")), "R$ 1.234.567,89");
        assert_eq!(format_currency(dec("100000")), "R$ 100.000,00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec("-20")), "-R$ 20,00");
    }

    #[test]
    fn test_weekday_labels() {
        assert_eq!(weekday_label(Weekday::Mon), "SEGUNDA");
        assert_eq!(weekday_label(Weekday::Sat), "SÁBADO");
    }

    #[test]
    fn test_csv_starts_with_bom_and_header() {
        let csv = timesheet_csv(&january_summary());
        let mut lines = csv.lines();

        assert_eq!(lines.next().unwrap(), format!("{}{}", UTF8_BOM, CSV_HEADER));
    }

    #[test]
    fn test_csv_has_one_row_per_day() {
        let csv = timesheet_csv(&january_summary());
        let rows: Vec<&str> = csv
            .lines()
            .skip(1)
            .take_while(|line| !line.is_empty())
            .collect();

        assert_eq!(rows.len(), 31);
        // 2026-01-02 is a Friday on the standard schedule
        assert_eq!(
            rows[1],
            "02/01/2026;SEXTA;07:30;12:00;13:30;18:00;9.00;1.00;0.00;0.00"
        );
        // 2026-01-03 is a Saturday with no hours
        assert_eq!(rows[2], "03/01/2026;SÁBADO;;;;;0.00;0.00;0.00;0.00");
    }

    #[test]
    fn test_csv_summary_block() {
        let csv = timesheet_csv(&january_summary());

        assert!(csv.contains("\nRESUMO\n"));
        assert!(csv.contains("Total Horas Trabalhadas;198.00 h\n"));
        assert!(csv.contains("Valor Hora;R$ 10,00\n"));
        assert!(csv.contains("Valor Extras;R$ 60,00\n"));
        assert!(csv.contains("Total Líquido;R$ 2.260,00\n"));
    }

    #[test]
    fn test_csv_file_name() {
        assert_eq!(csv_file_name(&january_summary()), "controle_horas_1_2026.csv");
    }
}
