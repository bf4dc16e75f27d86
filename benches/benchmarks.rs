//! Performance benchmarks for pursgraph

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pursgraph::test_utils::{TestProject, module_source};
use pursgraph::{
    DiscoveryConfig, ModuleSelector, SourceModule, build, discover, extract_dependencies,
    render, sanitize, select_modules_with,
};

// Sample source with everything the sanitizer has to strip
const PURS_SOURCE: &str = r#"-- | Application entry point.
module App.Main
  ( main
  , Config(..)
  ) where

import Prelude

import Data.Maybe (Maybe(..), fromMaybe)
import Effect (Effect)
import Effect.Console (log)
import App.Server as Server -- the HTTP server

{- Configuration record.
   import Not.A.Real.Import
-}
type Config = { port :: Int, host :: String }

main :: Effect Unit
main = do
  log "starting (debug)"
  Server.start { port: 8080, host: "localhost" }
"#;

/// Names like `Layer3.Part7`, each importing a handful of its neighbours.
fn synthetic_modules(count: usize) -> Vec<SourceModule> {
    (0..count)
        .map(|i| {
            let name = format!("Layer{}.Part{}", i % 10, i);
            let imports: Vec<String> = (1..=4)
                .map(|d| format!("Layer{}.Part{}", (i + d) % 10, (i + d) % count))
                .collect();
            let imports: Vec<&str> = imports.iter().map(String::as_str).collect();
            SourceModule::from_source(format!("{}.purs", name), &module_source(&name, &imports))
                .expect("synthetic module has a declaration")
        })
        .collect()
}

fn create_project_with_modules(count: usize) -> TestProject {
    let project = TestProject::new();
    for module in synthetic_modules(count) {
        project.add_module(&module.name, &[]);
    }
    project
}

fn bench_sanitize(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize");

    group.bench_function("typical_module", |b| {
        b.iter(|| sanitize(black_box(PURS_SOURCE)))
    });

    let large = PURS_SOURCE.repeat(200);
    group.bench_function("large_module", |b| b.iter(|| sanitize(black_box(&large))));

    group.finish();
}

fn bench_extraction(c: &mut Criterion) {
    let lines: Vec<String> = sanitize(PURS_SOURCE).lines().map(str::to_string).collect();

    c.bench_function("extract_dependencies", |b| {
        b.iter(|| extract_dependencies(black_box(&lines)))
    });
}

fn bench_discovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("discovery");

    let project = create_project_with_modules(500);
    group.bench_function("discover_500_files", |b| {
        b.iter(|| discover(black_box(project.path()), "purs"))
    });

    let files = discover(project.path(), "purs").unwrap();
    let selector = ModuleSelector::all();
    for workers in [1, 0] {
        let config = DiscoveryConfig {
            parallel_workers: workers,
            ..Default::default()
        };
        group.bench_function(format!("select_500_files_jobs_{}", workers), |b| {
            b.iter(|| select_modules_with(black_box(&files), &selector, &config))
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph");
    let selector = ModuleSelector::all();

    for count in [100, 1000] {
        let modules = synthetic_modules(count);
        group.bench_function(format!("build_{}_modules", count), |b| {
            b.iter(|| build(black_box(&modules), &selector))
        });

        let tree = build(&modules, &selector);
        group.bench_function(format!("render_{}_modules", count), |b| {
            b.iter(|| render(black_box(&tree)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_sanitize,
    bench_extraction,
    bench_discovery,
    bench_build_and_render,
);
criterion_main!(benches);
