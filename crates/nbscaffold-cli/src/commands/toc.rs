use crate::catalog;
use crate::cli::{TocArgs, TocCommands};
use crate::error::{CliError, Result};
use nbscaffold::core::models::toc::Volume;
use nbscaffold::engine::config::ScaffoldConfigBuilder;
use nbscaffold::engine::plan::ScaffoldPlan;
use nbscaffold::workflows;
use std::path::{Path, PathBuf};

pub fn run(args: TocArgs) -> Result<()> {
    match args.command {
        TocCommands::List => handle_list(),
        TocCommands::Show { name_or_path } => handle_show(&name_or_path),
    }
}

fn handle_list() -> Result<()> {
    for name in catalog::builtin_names() {
        let volume = catalog::load_builtin(name)?;
        println!("{}", describe(name, &volume));
    }
    Ok(())
}

fn handle_show(name_or_path: &str) -> Result<()> {
    let volumes = [catalog::resolve(name_or_path)?];
    let config = ScaffoldConfigBuilder::new()
        .root(PathBuf::new())
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    let plan = workflows::scaffold::plan(&volumes, &config)?;
    println!("{}", describe(name_or_path, &volumes[0]));
    print!("{}", render_tree(&plan));
    Ok(())
}

fn describe(name: &str, volume: &Volume) -> String {
    format!(
        "{:<14} Volume {}: {} ({} chapters, {} sections)",
        name,
        volume.number,
        volume.topic,
        volume.chapters.len(),
        volume.chapters.section_count()
    )
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn render_tree(plan: &ScaffoldPlan<'_>) -> String {
    let mut out = String::new();
    for volume in &plan.volumes {
        out.push_str(&format!("{}/\n", file_name(&volume.dir)));
        out.push_str(&format!("  {}/\n", file_name(&volume.chapters_dir)));
        for chapter in &volume.chapters {
            out.push_str(&format!("    {}/\n", file_name(&chapter.dir)));
            for document in &chapter.documents {
                out.push_str(&format!("      {}\n", file_name(&document.path)));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_tree(name: &str) -> String {
        let volumes = [catalog::load_builtin(name).unwrap()];
        let config = ScaffoldConfigBuilder::new().root(PathBuf::new()).build().unwrap();
        let plan = workflows::scaffold::plan(&volumes, &config).unwrap();
        render_tree(&plan)
    }

    #[test]
    fn describe_summarizes_counts() {
        let volume = catalog::load_builtin("feynman-vol1").unwrap();
        assert_eq!(
            describe("feynman-vol1", &volume),
            "feynman-vol1   Volume 1: Mechanics, Radiation, and Heat (4 chapters, 19 sections)"
        );
    }

    #[test]
    fn tree_lists_chapters_and_sections_in_order() {
        let tree = plan_tree("feynman-vol3");
        let mut lines = tree.lines();

        assert_eq!(lines.next(), Some("volume-3-quantum-mechanics/"));
        assert_eq!(lines.next(), Some("  chapters/"));
        assert_eq!(lines.next(), Some("    ch01-quantum-behavior/"));
        assert_eq!(lines.next(), Some("      Section_1-1_Atomic_mechanics.ipynb"));
        assert_eq!(lines.next(), Some("      Section_1-2_An_experiment_with_bullets.ipynb"));

        let ch21 = tree.find("    ch21-").unwrap();
        assert!(tree.find("    ch02-").unwrap() < ch21);
        assert!(tree[ch21..].contains("      Section_21-9_The_Josephson_junction.ipynb"));
    }

    #[test]
    fn tree_uses_slug_override() {
        let tree = plan_tree("feynman-vol1");
        assert!(tree.starts_with("volume-1-mechanics-radiation-heat/\n"));
        assert!(tree.contains("    ch03-the-relation-of-physics-to-other-sciences/\n"));
        assert!(tree.contains("      Section_3-7_How_did_it_get_that_way.ipynb\n"));
    }
}
