use clap::Parser;
use docportal::config::PortalConfig;
use docportal::error::{PortalError, Result};
use docportal::html::page::PageSlots;
use docportal::portal::{Message, Portal};
use docportal::queries::filter::{self, ResourceFilter};
use docportal::source::fs::FileSource;
use std::fs;
use std::path::PathBuf;

mod args;
mod print;
use args::{Cli, Commands, Page};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = PortalConfig::load(&cli.data_dir)?;
    let source =
        FileSource::new(&cli.data_dir).with_files(&config.docs_file, &config.resources_file);

    // A failed load degrades that collection to empty; the warnings are the
    // only trace of it, so surface them before any listing.
    let portal = Portal::load(&source);
    print::print_messages(portal.messages());

    match cli.command {
        Commands::Render {
            page,
            template,
            query,
            out,
        } => handle_render(&portal, page, template, query, out),
        Commands::Search { query } => handle_search(&portal, &query),
        Commands::Resources {
            kind,
            area,
            query,
            tag,
        } => handle_resources(&portal, kind, area, query, tag),
        Commands::Stats => handle_stats(&portal),
    }
}

fn handle_render(
    portal: &Portal,
    page: Page,
    template: Option<PathBuf>,
    query: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let template_content = match &template {
        Some(path) => Some(fs::read_to_string(path).map_err(PortalError::Io)?),
        None => None,
    };
    let mut slots = match &template_content {
        Some(t) => PageSlots::from_template(t),
        None => PageSlots::new(),
    };

    match page {
        Page::Home => {
            portal.initialize_home(&mut slots);
            if let Some(q) = &query {
                portal.render_search(&mut slots, q);
            }
        }
        Page::Resources => portal.render_resources(&mut slots, &ResourceFilter::default()),
    }

    let output = match &template_content {
        Some(t) => slots.apply(t),
        None => bare_fragments(&slots),
    };

    match out {
        Some(path) => {
            fs::write(&path, output).map_err(PortalError::Io)?;
            print::print_messages(&[Message::success(format!("Wrote {}", path.display()))]);
        }
        None => print!("{}", output),
    }
    Ok(())
}

// Without a template shell, each filled slot is emitted under its own
// marker so the output can be spliced by hand.
fn bare_fragments(slots: &PageSlots) -> String {
    let mut out = String::new();
    for name in slots.filled_names() {
        let content = slots.get(name).unwrap_or("");
        out.push_str(&format!("<!-- slot:{} -->\n", name));
        out.push_str(content);
        if !content.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

fn handle_search(portal: &Portal, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        return Err(PortalError::Api("Search query cannot be empty".into()));
    }
    print::print_documents(&portal.search(query));
    Ok(())
}

fn handle_resources(
    portal: &Portal,
    kind: Option<String>,
    area: Option<String>,
    query: Option<String>,
    tag: Option<String>,
) -> Result<()> {
    let filtered = if let Some(tag) = tag {
        filter::by_tag(portal.resources(), &tag)
    } else {
        portal.filter_resources(&ResourceFilter { kind, area, query })
    };
    print::print_resources(&filtered);
    Ok(())
}

fn handle_stats(portal: &Portal) -> Result<()> {
    print::print_stats(&portal.section_stats());
    Ok(())
}
