use anyhow::Result;
use relaunch::catalog::Catalog;
use serde_json::json;

/// Print a plain-text listing of the filtered view.
pub(crate) fn print_plain(catalog: &Catalog) {
    if catalog.view_len() == 0 {
        println!("No programmes match your filters.");
        return;
    }

    for program in catalog.view() {
        let weeks = match program.duration_weeks {
            0 => "—".to_string(),
            weeks => format!("{weeks} wks"),
        };
        let regions = if program.region.is_empty() {
            "—".to_string()
        } else {
            program.region.join(", ")
        };
        println!(
            "{}\t{}\t{}\t{}\t{}",
            program.title_text(),
            program.company_text(),
            if program.paid { "Paid" } else { "Unpaid/Varies" },
            weeks,
            regions
        );
    }
}

/// Format the filtered view as a JSON string.
pub(crate) fn format_view_json(catalog: &Catalog) -> Result<String> {
    let items: Vec<serde_json::Value> = catalog
        .view()
        .map(|program| {
            json!({
                "title": program.title,
                "company": program.company,
                "description": program.description,
                "paid": program.paid,
                "durationWeeks": program.duration_weeks,
                "region": program.region,
                "tags": program.tags,
                "applicationUrl": program.application_url,
            })
        })
        .collect();

    let payload = json!({
        "count": items.len(),
        "items": items,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the filtered view.
pub(crate) fn print_json(catalog: &Catalog) -> Result<()> {
    println!("{}", format_view_json(catalog)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use relaunch::catalog::FilterInput;
    use relaunch::types::Program;
    use serde_json::Value;

    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.set_dataset(vec![
            Program {
                title: Some("Return to Tech".into()),
                company: Some("Acme".into()),
                paid: true,
                duration_weeks: 12,
                region: vec!["Ireland".into()],
                ..Program::default()
            },
            Program {
                title: Some("Finance Relaunch".into()),
                company: Some("Zeta".into()),
                ..Program::default()
            },
        ]);
        catalog
    }

    #[test]
    fn json_output_reports_count_and_camel_case_fields() {
        let catalog = sample_catalog();
        let raw = format_view_json(&catalog).expect("json");
        let value: Value = serde_json::from_str(&raw).expect("parse");

        assert_eq!(value["count"], 2);
        assert_eq!(value["items"][0]["company"], "Acme");
        assert_eq!(value["items"][0]["durationWeeks"], 12);
    }

    #[test]
    fn json_output_respects_the_active_filter() {
        let mut catalog = sample_catalog();
        catalog.set_filter(FilterInput {
            paid_only: true,
            ..FilterInput::default()
        });

        let raw = format_view_json(&catalog).expect("json");
        let value: Value = serde_json::from_str(&raw).expect("parse");
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["title"], "Return to Tech");
    }
}
