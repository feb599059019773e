//! User prompt functions for interactive CLI input.

use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::service::ProjectSummary;

/// Pick the project to open: the only one, or ask
pub fn choose_project(projects: &[ProjectSummary]) -> io::Result<ProjectSummary> {
    if projects.len() == 1 {
        println!("Found one project: {}", display_name(&projects[0]));
        println!();
        return Ok(projects[0].clone());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    prompt_project_selection(projects, &mut input, &mut output)
}

fn display_name(project: &ProjectSummary) -> &str {
    if project.name.is_empty() {
        &project.id
    } else {
        &project.name
    }
}

/// Display project selection prompt and return the selected project
pub fn prompt_project_selection<R: BufRead, W: Write>(
    projects: &[ProjectSummary],
    input: &mut R,
    output: &mut W,
) -> io::Result<ProjectSummary> {
    writeln!(output)?;
    writeln!(output, "╔═══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║  Deliverables TUI - Select a Project                          ║")?;
    writeln!(output, "╚═══════════════════════════════════════════════════════════════╝")?;
    writeln!(output)?;

    for (i, project) in projects.iter().enumerate() {
        writeln!(
            output,
            "  {}) {:35} [{}/{}] ({})",
            i + 1,
            display_name(project),
            project.completed,
            project.total,
            project.id
        )?;
    }

    writeln!(output)?;
    write!(output, "Select project [1-{}]: ", projects.len())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    let selection: usize = line.trim().parse().map_err(|_| {
        io::Error::new(io::ErrorKind::InvalidInput, "Invalid selection")
    })?;

    if selection < 1 || selection > projects.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "Selection out of range",
        ));
    }

    let chosen = projects[selection - 1].clone();
    writeln!(output)?;
    writeln!(output, "Selected: {}", display_name(&chosen))?;
    writeln!(output)?;

    Ok(chosen)
}

/// Explain how to create a store when none has projects
pub fn print_no_projects_help(store_path: &Path) {
    println!("No projects found in {}.", store_path.display());
    println!();
    println!("Add one to the store file, for example:");
    println!("  {{ \"projects\": [ {{ \"id\": \"website\", \"name\": \"Website\", \"deliverables\": [] }} ] }}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<ProjectSummary> {
        vec![
            ProjectSummary {
                id: "website".to_string(),
                name: "Website".to_string(),
                total: 4,
                completed: 1,
            },
            ProjectSummary {
                id: "mobile".to_string(),
                name: String::new(),
                total: 0,
                completed: 0,
            },
        ]
    }

    #[test]
    fn test_prompt_selects_project() {
        let mut input = io::Cursor::new("2\n");
        let mut output = Vec::new();
        let chosen = prompt_project_selection(&projects(), &mut input, &mut output).unwrap();
        assert_eq!(chosen.id, "mobile");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Website"));
        assert!(shown.contains("[1/4]"));
        assert!(shown.contains("Selected: mobile"));
    }

    #[test]
    fn test_prompt_rejects_out_of_range() {
        let mut input = io::Cursor::new("3\n");
        let mut output = Vec::new();
        let err = prompt_project_selection(&projects(), &mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_prompt_rejects_garbage() {
        let mut input = io::Cursor::new("web\n");
        let mut output = Vec::new();
        assert!(prompt_project_selection(&projects(), &mut input, &mut output).is_err());
    }
}
