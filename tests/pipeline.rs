use tri_raster::obj::parse_obj;
use tri_raster::screen::Framebuffer;
use tri_raster::{Camera, Color, Mesh, Rasterizer, Renderer, Shading, Surface, Triangle, Vec3, Winding};

const RED: Color = Color::new(255, 0, 0);
const GREEN: Color = Color::new(0, 255, 0);
const BLUE: Color = Color::new(0, 0, 255);

fn rasterizer(width: u32, height: u32) -> Rasterizer {
    Rasterizer::new(Camera::new(width, height, 60f32.to_radians(), 1.0))
}

fn screen_triangle(points: [(f32, f32); 3], depth: f32, color: Color) -> Triangle {
    let [a, b, c] = points.map(|(x, y)| Vec3::new(x, y, depth));
    Triangle::new(a, b, c, color)
}

#[test]
fn unit_triangle_end_to_end() {
    let mut fb = Framebuffer::new(3, 3);
    let tri = screen_triangle([(0.0, 0.0), (2.0, 0.0), (0.0, 2.0)], 1.0, RED);
    rasterizer(3, 3).rasterize_projected(&[tri], &mut fb);

    assert_eq!(fb.pixel(0, 0), Some(RED));
    assert_eq!(fb.pixel(1, 0), Some(RED));
    assert_eq!(fb.pixel(0, 1), Some(RED));
    assert_eq!(fb.pixel(2, 2), None);
}

#[test]
fn nearer_of_two_overlapping_triangles_wins() {
    let far = screen_triangle([(-1.0, -1.0), (5.0, -1.0), (-1.0, 5.0)], 2.0, BLUE);
    let near = screen_triangle([(-1.0, -1.0), (5.0, -1.0), (-1.0, 5.0)], 1.0, GREEN);
    let mut fb = Framebuffer::new(2, 2);
    rasterizer(2, 2).rasterize_projected(&[far, near], &mut fb);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert_eq!(fb.pixel(x, y), Some(GREEN));
    }
}

#[test]
fn later_frame_starts_from_cleared_surface() {
    let renderer = Renderer::new(rasterizer(24, 24), Shading::default());
    let mut cube = Mesh::cube(Color::WHITE, Winding::Clockwise);
    cube.position = Vec3::new(0.0, 0.0, 3.0);

    let mut fb = Framebuffer::new(24, 24);
    assert!(renderer.render_scene(std::slice::from_ref(&cube), Some(Vec3::new(10.0, 10.0, 0.0)), &mut fb) > 0);

    cube.position = Vec3::new(0.0, 0.0, -3.0);
    fb.clear();
    assert_eq!(renderer.render_scene(&[cube], None, &mut fb), 0);
    assert!((0..24).all(|y| (0..24).all(|x| fb.pixel(x, y).is_none())));
}

#[test]
fn loaded_mesh_renders_in_front_of_camera() {
    // Square facing the camera, wound clockwise as seen from -z.
    let src = "v -1 1 0\nv 1 1 0\nv 1 -1 0\nv -1 -1 0\nf 1 2 3 4\n";
    let mut mesh = parse_obj(src.as_bytes(), Color::new(255, 125, 50)).unwrap();
    mesh.position = Vec3::new(0.0, 0.0, 4.0);

    let renderer = Renderer::new(
        rasterizer(16, 16),
        Shading { ambient: 0.0, diffuse: 1.0, winding: Winding::Clockwise },
    );
    let mut fb = Framebuffer::new(16, 16);
    renderer.render_mesh_shaded(&mesh, Vec3::new(0.0, 0.0, -1.0), &mut fb);
    assert_eq!(fb.pixel(8, 8), Some(Color::new(255, 125, 50)));

    // Lit from behind: only the (zero) ambient term remains.
    let mut fb = Framebuffer::new(16, 16);
    renderer.render_mesh_shaded(&mesh, Vec3::new(0.0, 0.0, 1.0), &mut fb);
    assert_eq!(fb.pixel(8, 8), Some(Color::BLACK));
}
