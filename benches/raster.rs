use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::{Mat4, Vec2, Vec3, Vec4};
use softrast::prelude::*;
use softrast::render::ProcessedVertex;

const TARGET_WIDTH: u32 = 800;
const TARGET_HEIGHT: u32 = 600;

fn flat_vertex(x: f32, y: f32) -> ProcessedVertex {
    ProcessedVertex {
        clip_position: Vec4::new(x, y, 0.0, 1.0),
        world_position: Vec3::new(x, y, 0.0),
        world_normal: Vec3::Z,
        color: Vec4::ONE,
        uv: Vec2::ZERO,
    }
}

// NDC-space triangles of increasing coverage; all counter-clockwise.
fn small_triangle() -> [ProcessedVertex; 3] {
    [
        flat_vertex(0.0, 0.05),
        flat_vertex(-0.05, -0.05),
        flat_vertex(0.05, -0.05),
    ]
}

fn medium_triangle() -> [ProcessedVertex; 3] {
    [
        flat_vertex(0.0, 0.4),
        flat_vertex(-0.4, -0.4),
        flat_vertex(0.4, -0.4),
    ]
}

fn large_triangle() -> [ProcessedVertex; 3] {
    [
        flat_vertex(0.0, 0.9),
        flat_vertex(-0.9, -0.9),
        flat_vertex(0.9, -0.9),
    ]
}

fn benchmark_single_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_triangle");

    let lights = [Light::directional(Vec3::new(0.0, -1.0, -1.0), Vec4::ONE)];
    let uniforms = UniformBuffer::new(
        Mat4::IDENTITY,
        Mat4::IDENTITY,
        Vec3::new(0.0, 0.0, 5.0),
        &lights,
    );

    for (name, triangle) in [
        ("small", small_triangle()),
        ("medium", medium_triangle()),
        ("large", large_triangle()),
    ] {
        group.bench_with_input(
            BenchmarkId::new("fragment_lit", name),
            &triangle,
            |b, tri| {
                let mut color = Buffer::new(TARGET_WIDTH, TARGET_HEIGHT, color::BLACK);
                let mut depth = DepthBuffer::new(TARGET_WIDTH, TARGET_HEIGHT, FAR_DEPTH);
                b.iter(|| {
                    depth.fill(FAR_DEPTH);
                    let mut targets = RenderTargets::new(&mut color).with_depth(&mut depth);
                    draw_triangle(black_box(*tri), &uniforms, &mut targets);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_mesh_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_draw");

    let camera = Camera::new(
        Vec3::new(0.0, 0.0, 5.0),
        60.0,
        TARGET_WIDTH as f32 / TARGET_HEIGHT as f32,
    );
    let lights = [Light::directional(Vec3::new(0.0, -1.0, -1.0), Vec4::ONE)];

    for (name, mesh) in [
        ("cube", geometry::cube()),
        ("sphere", geometry::uv_sphere(1.0, 24, 48)),
        ("torus", geometry::torus(1.0, 0.4, 32, 16)),
    ] {
        for mode in [LightingMode::Vertex, LightingMode::Fragment] {
            let uniforms = UniformBuffer::new(
                Mat4::IDENTITY,
                camera.view_projection(),
                camera.position(),
                &lights,
            )
            .with_lighting(mode);

            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}").to_lowercase(), name),
                &mesh,
                |b, mesh| {
                    let mut color = Buffer::new(TARGET_WIDTH, TARGET_HEIGHT, color::BLACK);
                    let mut depth = DepthBuffer::new(TARGET_WIDTH, TARGET_HEIGHT, FAR_DEPTH);
                    b.iter(|| {
                        color.fill(color::BLACK);
                        depth.fill(FAR_DEPTH);
                        let mut targets = RenderTargets::new(&mut color).with_depth(&mut depth);
                        draw_mesh(black_box(mesh), &uniforms, &mut targets);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_single_triangle, benchmark_mesh_draw);
criterion_main!(benches);
