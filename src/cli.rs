//! Plain-text rendering for the command line.

use std::fmt::Write;

use country_explorer::domain::{display_name, Country};
use country_explorer::explorer::ExplorerView;

/// Group digits in threes: `212559409` → `212,559,409`.
pub fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

pub fn render_list(view: &ExplorerView) -> String {
    let mut out = String::new();
    let pages = view.pagination.total_pages.max(1);
    let _ = writeln!(
        out,
        "Page {}/{} | {} countries",
        view.pagination.current_page, pages, view.total_countries
    );

    if view.countries.is_empty() {
        out.push_str("No countries match the current filters.\n");
        return out;
    }

    for country in view.countries.iter() {
        let subregion = Some(country.subregion.as_str()).filter(|s| !s.is_empty());
        let _ = writeln!(
            out,
            "{:<3} {:<32} {:<16} {:<20} {:>15}",
            country.code,
            country.name,
            display_name(&country.continent, subregion),
            or_dash(&country.capital),
            group_digits(country.population),
        );
    }
    out
}

pub fn render_detail(country: &Country) -> String {
    let mut out = String::new();
    let subregion = Some(country.subregion.as_str()).filter(|s| !s.is_empty());
    let currencies: Vec<String> = country
        .currencies
        .iter()
        .map(|c| match c.symbol.as_str() {
            "" => format!("{} ({})", c.name, c.code),
            symbol => format!("{} ({}, {})", c.name, c.code, symbol),
        })
        .collect();

    let _ = writeln!(out, "{} ({})", country.name, country.code);
    let _ = writeln!(out, "  Official name: {}", or_dash(&country.official_name));
    let _ = writeln!(out, "  Native name:   {}", or_dash(&country.native_name));
    let _ = writeln!(
        out,
        "  Continent:     {}",
        display_name(&country.continent, subregion)
    );
    let _ = writeln!(out, "  Region:        {}", or_dash(&country.region));
    let _ = writeln!(out, "  Subregion:     {}", or_dash(&country.subregion));
    let _ = writeln!(out, "  Capital:       {}", or_dash(&country.capital));
    let _ = writeln!(out, "  Population:    {}", group_digits(country.population));
    let _ = writeln!(out, "  Area:          {} km²", country.area);
    let _ = writeln!(out, "  Languages:     {}", join_or_dash(&country.languages));
    let _ = writeln!(out, "  Currencies:    {}", join_or_dash(&currencies));
    let _ = writeln!(out, "  Borders:       {}", join_or_dash(&country.borders));
    let _ = writeln!(out, "  Timezones:     {}", join_or_dash(&country.timezones));
    let _ = writeln!(out, "  Landlocked:    {}", if country.landlocked { "yes" } else { "no" });
    let _ = writeln!(out, "  Independent:   {}", if country.independent { "yes" } else { "no" });
    if !country.flag.is_empty() {
        let _ = writeln!(out, "  Flag:          {}", country.flag);
    }
    out
}
