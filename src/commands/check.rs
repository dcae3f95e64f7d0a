use crate::*;
use std::collections::BTreeSet;

fn project_name(graph: &ResolvedGraph) -> String {
    match &graph.root().identity {
        NodeIdentity::Project { path } => {
            let trimmed = path.trim_start_matches(':');
            if trimmed.is_empty() {
                "root".to_string()
            } else {
                trimmed.to_string()
            }
        }
        _ => graph.root().id.clone(),
    }
}

pub fn handle_check(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    let Commands::Check {
        graph,
        targets,
        repositories,
        output_dir,
        project,
        source_set,
        excludes,
    } = &cli.command
    else {
        return Ok(false);
    };

    let resolved = ResolvedGraph::load(graph)
        .map_err(|e| anyhow::anyhow!("unable to load graph {}: {}", graph.display(), e))?;

    let merged = Config {
        project: project.clone().or_else(|| config.project.clone()),
        source_set: source_set
            .clone()
            .unwrap_or_else(|| config.source_set.clone()),
        targets: config.targets.iter().chain(targets.iter()).cloned().collect(),
        repositories: repositories
            .iter()
            .chain(config.repositories.iter())
            .cloned()
            .collect(),
        output_dir: output_dir.clone().unwrap_or_else(|| config.output_dir.clone()),
        exclude: config.exclude.iter().chain(excludes.iter()).cloned().collect(),
        ..config.clone()
    };
    validate_config(&merged)?;

    let current: BTreeSet<TargetId> = merged
        .targets
        .iter()
        .map(|t| TargetId::from(t.trim()))
        .collect();
    let repos: Vec<Repository> = merged
        .repositories
        .iter()
        .map(|r| Repository::parse(r))
        .collect();
    let cache_dir = match &merged.cache_dir {
        Some(d) => Some(d.clone()),
        None => default_cache_dir().ok(),
    };
    let exclusions = ExclusionPolicy {
        modules: merged.exclude.iter().map(|e| e.trim().to_string()).collect(),
        ignore_targetless: merged.ignore_targetless,
    };
    let catalog = NativeCatalog::from_config(&merged.native);
    let project = merged
        .project
        .clone()
        .unwrap_or_else(|| project_name(&resolved));
    let source_set = merged.source_set.trim().to_string();
    let output_dir = merged.output_dir.clone();

    let source = DescriptorSource {
        graph: Some(&resolved),
        repositories: &repos,
        cache_dir: cache_dir.as_deref(),
    };
    let analysis = analyze(&resolved, &source, &catalog, &exclusions, &current)?;

    let path = report_path(&output_dir, &source_set);
    write_atomically(&path, &render(&project, &source_set, &analysis.report))?;
    tracing::info!(path = %path.display(), "wrote report");

    let report = analysis.report;
    let summary = CheckSummary {
        project,
        source_set,
        report_path: path.to_string_lossy().to_string(),
        dependency_count: report.supported_by_dependency.len(),
        current_targets: report.current_targets,
        possible_targets: report.possible_targets,
        missing_targets: report.missing_targets.clone(),
        unavailable_targets: report.unavailable_targets,
        warnings: analysis.walk.warnings,
    };
    let ok = summary.missing_targets.is_empty();

    if cli.json {
        print_json(ok, &summary)?;
    } else {
        println!("report: {}", summary.report_path);
        println!("dependencies: {}", summary.dependency_count);
        println!("current: {}", join_targets(&summary.current_targets));
        println!("possible: {}", join_targets(&summary.possible_targets));
        println!("missing: {}", join_targets(&summary.missing_targets));
    }

    if !ok {
        return Err(CheckError::MissingTargets(report.missing_targets).into());
    }
    Ok(true)
}

fn join_targets(targets: &BTreeSet<TargetId>) -> String {
    targets
        .iter()
        .map(TargetId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
