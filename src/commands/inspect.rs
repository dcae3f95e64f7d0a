use crate::*;

pub fn handle_inspect_commands(cli: &Cli, config: &Config) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Deps { graph } => {
            let resolved = ResolvedGraph::load(graph)
                .map_err(|e| anyhow::anyhow!("unable to load graph {}: {}", graph.display(), e))?;
            let walk = walk(&resolved)?;
            tracing::debug!("dependency graph:\n{}", format_trace(&walk.trace));
            let listing = DependencyListing {
                coordinates: walk.coordinates.iter().map(|c| c.to_string()).collect(),
                warnings: walk.warnings,
            };
            if cli.json {
                print_json(true, &listing)?;
            } else {
                for c in &listing.coordinates {
                    println!("{}", c);
                }
                for w in &listing.warnings {
                    eprintln!("warning: {}", w);
                }
            }
        }
        Commands::Targets {
            module_file,
            coordinate,
        } => {
            let coordinate: LibraryCoordinate = match coordinate {
                Some(raw) => raw.parse().map_err(anyhow::Error::msg)?,
                None => LibraryCoordinate::new("", file_stem(module_file), ""),
            };
            let raw = std::fs::read_to_string(module_file)?;
            let descriptor = parse_descriptor(&coordinate, &raw)?;
            let catalog = NativeCatalog::from_config(&config.native);
            let targets = extract_targets(&coordinate, &descriptor, &catalog)?;
            let listing = TargetListing {
                coordinate: coordinate.to_string(),
                targets,
            };
            print_one(cli.json, listing, |l| {
                l.targets
                    .iter()
                    .map(TargetId::as_str)
                    .collect::<Vec<_>>()
                    .join("\n")
            })?;
        }
        Commands::Catalog { include_deprecated } => {
            let catalog = NativeCatalog::from_config(&config.native)
                .with_deprecated(*include_deprecated || config.native.include_deprecated);
            print_out(cli.json, &catalog.entries(), |e| {
                if e.deprecated {
                    format!("{}\t{}\tdeprecated", e.target, e.konan_name)
                } else {
                    format!("{}\t{}", e.target, e.konan_name)
                }
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

fn file_stem(path: &std::path::Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
