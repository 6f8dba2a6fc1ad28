use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{AnalysisReport, ClauseCategory, ClauseMap, ClauseReport, DocumentReport};

/// Render a colored terminal report.
pub fn render(report: &AnalysisReport, verbose: bool, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", summary_line(report));
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "legal-insights".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Documents: {}\n", report.documents.len());

    for doc in &report.documents {
        render_document(doc, verbose);
    }

    println!(" {} Most frequent legal terms:\n", "[TERMS]".cyan().bold());
    if report.top_terms.is_empty() {
        println!("   {}\n", "no legal terms found".dimmed());
    } else {
        println!("{}\n", terms_table(report));
    }

    Ok(())
}

/// Render only the clause tags of each document.
pub fn render_clauses(reports: &[ClauseReport], quiet: bool) {
    for report in reports {
        let count = |c: ClauseCategory| report.key_clauses.get(&c).map_or(0, Vec::len);
        if quiet {
            println!(
                "{}  Termination: {}  Liability: {}  Confidentiality: {}",
                report.path,
                count(ClauseCategory::Termination).to_string().red(),
                count(ClauseCategory::Liability).to_string().yellow(),
                count(ClauseCategory::Confidentiality).to_string().blue(),
            );
            continue;
        }

        println!("\n {} {}\n", "[CLAUSES]".magenta().bold(), report.path.bold());
        if report.key_clauses.values().all(Vec::is_empty) {
            println!("   {}\n", "no clauses found".dimmed());
        } else {
            println!("{}\n", clause_table(&report.key_clauses));
        }
    }
}

fn summary_line(report: &AnalysisReport) -> String {
    let mut clause_counts = [0usize; 3];
    let mut sentences = 0;
    for doc in &report.documents {
        sentences += doc.insights.document_stats.sentences;
        for (i, category) in ClauseCategory::ALL.iter().enumerate() {
            clause_counts[i] += doc.insights.key_clauses.get(category).map_or(0, Vec::len);
        }
    }

    let top = report
        .top_terms
        .first()
        .map(|(term, count)| format!("{} ({})", term, count))
        .unwrap_or_else(|| "-".to_string());

    format!(
        "Documents: {}  Sentences: {}  Termination: {}  Liability: {}  Confidentiality: {}  Top term: {}",
        report.documents.len(),
        sentences,
        clause_counts[0].to_string().red(),
        clause_counts[1].to_string().yellow(),
        clause_counts[2].to_string().blue(),
        top,
    )
}

fn render_document(doc: &DocumentReport, verbose: bool) {
    let stats = &doc.insights.document_stats;
    let clauses = &doc.insights.key_clauses;
    let count = |c: ClauseCategory| clauses.get(&c).map_or(0, Vec::len);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", doc.path.bold());
    println!(
        " │  {:<48} │",
        format!("Words: {}   Sentences: {}", stats.total_words, stats.sentences)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Termination     : {:>4}",
            "■".red(),
            count(ClauseCategory::Termination)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Liability       : {:>4}",
            "■".yellow(),
            count(ClauseCategory::Liability)
        )
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  Confidentiality : {:>4}",
            "■".blue(),
            count(ClauseCategory::Confidentiality)
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");

    if verbose {
        let summary = if doc.insights.summary.is_empty() {
            "(no sentence dense enough to summarize)".dimmed().to_string()
        } else {
            doc.insights.summary.clone()
        };
        println!(" {} {}\n", "[SUMMARY]".green().bold(), summary);
    }

    if clauses.values().any(|v| !v.is_empty()) {
        println!(" {} Key clauses:\n", "[CLAUSES]".magenta().bold());
        println!("{}\n", clause_table(clauses));
    }

    if !stats.entities.is_empty() {
        println!(" {} Entities:\n", "[ENTITIES]".cyan().bold());
        println!("{}\n", entity_table(doc));
    }
}

fn header(cells: &[&str]) -> Vec<Cell> {
    cells
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect()
}

fn category_color(category: ClauseCategory) -> Color {
    match category {
        ClauseCategory::Termination => Color::Red,
        ClauseCategory::Liability => Color::Yellow,
        ClauseCategory::Confidentiality => Color::Blue,
    }
}

fn clause_table(clauses: &ClauseMap) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Category", "Sentence"]));

    for (category, sentences) in clauses {
        for sentence in sentences {
            table.add_row(vec![
                Cell::new(category.to_string()).fg(category_color(*category)),
                Cell::new(sentence),
            ]);
        }
    }
    table
}

fn entity_table(doc: &DocumentReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["Label", "Count", "Entities"]));

    for (label, texts) in doc.insights.document_stats.entities.iter() {
        table.add_row(vec![
            Cell::new(label).fg(Color::Cyan),
            Cell::new(texts.len()).set_alignment(CellAlignment::Right),
            Cell::new(texts.join(", ")),
        ]);
    }
    table
}

fn terms_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header(&["#", "Term", "Count"]));

    for (rank, (term, count)) in report.top_terms.iter().enumerate() {
        table.add_row(vec![
            Cell::new(rank + 1).set_alignment(CellAlignment::Right),
            Cell::new(term),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClauseMap, DocumentInsights, DocumentStats, EntityMap};

    fn report() -> AnalysisReport {
        let mut key_clauses: ClauseMap = ClauseCategory::ALL.iter().map(|c| (*c, Vec::new())).collect();
        key_clauses
            .get_mut(&ClauseCategory::Liability)
            .unwrap()
            .push("The Company shall not be liable.".to_string());

        let mut entities = EntityMap::new();
        entities.push("DATE", "30 days");

        AnalysisReport {
            documents: vec![DocumentReport {
                path: "nda.txt".to_string(),
                insights: DocumentInsights {
                    summary: String::new(),
                    key_clauses,
                    document_stats: DocumentStats {
                        total_words: 7,
                        sentences: 1,
                        entities,
                    },
                },
            }],
            top_terms: vec![("limitation of liability".to_string(), 3)],
        }
    }

    #[test]
    fn test_summary_line() {
        colored::control::set_override(false);
        assert_eq!(
            summary_line(&report()),
            "Documents: 1  Sentences: 1  Termination: 0  Liability: 1  Confidentiality: 0  Top term: limitation of liability (3)"
        );
    }

    #[test]
    fn test_tables_contain_rows() {
        let r = report();
        let clauses = clause_table(&r.documents[0].insights.key_clauses).to_string();
        assert!(clauses.contains("liability"));
        assert!(clauses.contains("The Company shall not be liable."));

        let terms = terms_table(&r).to_string();
        assert!(terms.contains("limitation of liability"));

        let entities = entity_table(&r.documents[0]).to_string();
        assert!(entities.contains("30 days"));
    }
}
