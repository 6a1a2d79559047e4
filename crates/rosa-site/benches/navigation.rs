//! Benchmarks for navigation projection and srcset templating.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rosa_site::{CONTAINER_DIRECTORY, ContentNode, ImageRef, NavigationProjector, build_srcset};

/// Create a content tree with specified depth and breadth.
///
/// Every third child is a plain page so the projection has work to do.
fn create_content_tree(depth: usize, breadth: usize) -> ContentNode {
    fn create_level(current_depth: usize, max_depth: usize, breadth: usize) -> ContentNode {
        let node = ContentNode::typed(CONTAINER_DIRECTORY)
            .with_attribute("title", format!("Level {current_depth}"));
        if current_depth == max_depth {
            return node;
        }

        node.with_children((0..breadth).map(|i| {
            if i % 3 == 2 {
                ContentNode::typed("page").with_attribute("title", format!("Page {i}"))
            } else {
                create_level(current_depth + 1, max_depth, breadth)
            }
        }))
    }

    create_level(0, depth, breadth)
}

fn bench_projection(c: &mut Criterion) {
    let projector = NavigationProjector::default();
    let mut group = c.benchmark_group("navigation_projection");

    for (depth, breadth) in [(3, 5), (5, 3), (2, 20)] {
        let tree = create_content_tree(depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("project", format!("{depth}x{breadth}")),
            &tree,
            |b, tree| b.iter(|| projector.project(tree)),
        );
    }

    group.finish();
}

fn bench_srcset(c: &mut Criterion) {
    let image = ImageRef::new("/media/rosa/dining-room.jpg");

    c.bench_function("build_srcset", |b| b.iter(|| build_srcset(&image)));
}

criterion_group!(benches, bench_projection, bench_srcset);
criterion_main!(benches);
