use std::collections::HashSet;
use std::sync::Arc;

use anyhow::{bail, Result};
use catalog::JsonlStore;
use clap::{Args, Parser, Subcommand};
use coursefinder::{CourseSearch, SearchParams};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(version, about = "Course catalog control: search and check JSONL catalogs")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Run one search (or follow every page with --all)
    Search {
        #[arg(long)]
        catalog: String,
        #[command(flatten)]
        query: QueryArgs,
        /// Follow nextCursor until the last page
        #[arg(long, default_value_t = false)]
        all: bool,
    },
    /// Validate a catalog: unique ids, non-empty semester and period
    Check {
        #[arg(long)]
        catalog: String,
    },
}

/// Same parameters the HTTP endpoint accepts.
#[derive(Args)]
struct QueryArgs {
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    campus: Option<String>,
    #[arg(long)]
    main_field_of_study: Option<String>,
    #[arg(long)]
    semester: Option<String>,
    #[arg(long)]
    period: Option<String>,
    #[arg(long)]
    block: Option<String>,
    #[arg(long)]
    study_pace: Option<String>,
    #[arg(long)]
    course_level: Option<String>,
    /// JSON object, e.g. '{"Skriftlig tentamen":"checked"}'
    #[arg(long)]
    examinations: Option<String>,
    #[arg(long)]
    sort_by: Option<String>,
    #[arg(long)]
    sort_order: Option<String>,
    #[arg(long)]
    limit: Option<usize>,
    #[arg(long)]
    cursor: Option<String>,
}

impl From<QueryArgs> for SearchParams {
    fn from(a: QueryArgs) -> Self {
        SearchParams {
            cursor: a.cursor,
            limit: a.limit.map(|l| l.to_string()),
            search: a.search,
            campus: a.campus,
            main_field_of_study: a.main_field_of_study,
            semester: a.semester,
            period: a.period,
            block: a.block,
            study_pace: a.study_pace,
            course_level: a.course_level,
            examinations: a.examinations,
            sort_by: a.sort_by,
            sort_order: a.sort_order,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Search { catalog, query, all } => run_search(catalog, query.into(), all).await,
        Cmd::Check { catalog } => run_check(catalog).await,
    }
}

async fn run_search(catalog: String, mut params: SearchParams, all: bool) -> Result<()> {
    let search = CourseSearch::new(Arc::new(JsonlStore::new(catalog)));
    loop {
        let page = search.search(&params).await?;
        for c in &page.courses {
            println!("{}\t{}\t{}\t{}", c.code, c.name, c.credits, c.id);
        }
        println!(
            "# total={} next_cursor={} has_next_page={}",
            page.total_count,
            page.next_cursor.as_deref().unwrap_or("-"),
            page.has_next_page
        );
        if !all || !page.has_next_page {
            break;
        }
        params.cursor = page.next_cursor;
    }
    Ok(())
}

async fn run_check(catalog: String) -> Result<()> {
    let courses = JsonlStore::new(catalog).load().await?;

    let mut seen = HashSet::new();
    let mut problems = 0usize;
    for c in &courses {
        if !seen.insert(c.id.as_str()) {
            eprintln!("duplicate id {} ({})", c.id, c.code);
            problems += 1;
        }
        if c.semester.is_empty() || c.period.is_empty() {
            eprintln!("{} ({}): empty semester or period", c.id, c.code);
            problems += 1;
        }
    }
    if problems > 0 {
        bail!("catalog has {problems} problem(s)");
    }
    println!("ok: {} courses", courses.len());
    Ok(())
}
