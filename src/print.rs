// Plain-stdout rendering of the catalogs
//
// Used by `dogdex print` and by headless mode (enable_tui = false). Same
// data, same declaration order as the TUI panels - just cards on stdout
// with no UI state.

use crate::content;
use clap::ValueEnum;
use owo_colors::OwoColorize;

/// Which catalog(s) to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintTarget {
    Breeds,
    Facts,
    Care,
    All,
}

/// Print the requested catalog(s) to stdout
pub fn print_target(target: PrintTarget) {
    match target {
        PrintTarget::Breeds => print!("{}", render_breeds()),
        PrintTarget::Facts => print!("{}", render_facts()),
        PrintTarget::Care => print!("{}", render_care()),
        PrintTarget::All => {
            print!("{}", render_breeds());
            println!();
            print!("{}", render_facts());
            println!();
            print!("{}", render_care());
        }
    }
}

fn heading(title: &str, blurb: &str) -> String {
    format!("{}\n{}\n\n", title.bold(), blurb.dimmed())
}

/// Breed cards: name, description, image URL
fn render_breeds() -> String {
    let mut out = heading(
        "Popular Dog Breeds",
        "Explore some of the most beloved dog breeds.",
    );
    for breed in content::BREEDS {
        out.push_str(&format!(
            "  {}\n    {}\n    {}\n",
            breed.name.bold(),
            breed.description,
            content::image_url(breed.name).dimmed(),
        ));
    }
    out
}

/// Fact cards, ordinal order
fn render_facts() -> String {
    let mut out = heading(
        "Fun Dog Facts",
        "Discover interesting facts about our canine companions.",
    );
    for fact in content::FACTS {
        out.push_str(&format!("  {} {}\n", "ℹ".cyan(), fact));
    }
    out
}

/// Care tip cards: title and body
fn render_care() -> String {
    let mut out = heading(
        "Dog Care Tips",
        "Learn how to keep your furry friend happy and healthy.",
    );
    for tip in content::CARE_TIPS {
        out.push_str(&format!("  {}\n    {}\n", tip.title.bold(), tip.content));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breeds_render_all_six_in_order() {
        let out = render_breeds();
        let mut last = 0;
        for breed in content::BREEDS {
            let pos = out[last..]
                .find(breed.name)
                .unwrap_or_else(|| panic!("{} missing or out of order", breed.name));
            last += pos + breed.name.len();
        }
        assert!(out.contains("?labrador-retriever"));
    }

    #[test]
    fn facts_render_all_five() {
        let out = render_facts();
        for fact in content::FACTS {
            assert!(out.contains(fact));
        }
    }

    #[test]
    fn care_renders_title_body_pairs() {
        let out = render_care();
        for tip in content::CARE_TIPS {
            assert!(out.contains(tip.title));
            assert!(out.contains(tip.content));
        }
    }
}
