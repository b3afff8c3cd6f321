//! End-to-end arrangement tests over small scenes of placed entities.

use float_cmp::approx_eq;

use gantry::arrange::{plane, space};
use gantry::geometry::plane::{Bounds2, Point2, Size2};
use gantry::geometry::space::{Bounds3, Point3, Size3};
use gantry::spatial::{Placed2, Placed3, Spatial3};

fn shelf() -> Bounds3 {
    Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(100.0, 40.0, 20.0))
}

#[test]
fn test_shelf_row_layout() {
    // Four crates of mixed sizes, scattered; a row layout should space
    // them along x and center them on depth and height.
    let b = shelf();
    let mut crates = vec![
        Placed3::new(Point3::new(90.0, 35.0, 3.0), Size3::new(10.0, 10.0, 10.0)),
        Placed3::new(Point3::new(12.0, 2.0, 18.0), Size3::new(20.0, 8.0, 6.0)),
        Placed3::new(Point3::new(55.0, 20.0, 10.0), Size3::new(4.0, 4.0, 4.0)),
        Placed3::new(Point3::new(31.0, 11.0, 1.0), Size3::new(8.0, 16.0, 12.0)),
    ];

    space::to_row(&b, &mut crates);

    for item in &crates {
        assert_eq!(item.location().y(), 20.0);
        assert_eq!(item.location().z(), 10.0);
    }

    // Sorted by original x: 12, 31, 55, 90. End entities tuck flush
    // against the container edges, inner ones land on even fractions
    // nudged inward by a fraction of their own width.
    assert_eq!(crates[1].calc_bounds().min_x(), b.min_x());
    assert_eq!(crates[0].calc_bounds().max_x(), b.max_x());

    let third = 100.0 / 3.0;
    assert!(approx_eq!(f32, crates[3].location().x(), third + 8.0 / 6.0, epsilon = 1e-4));
    assert!(approx_eq!(f32, crates[2].location().x(), 2.0 * third - 4.0 / 6.0, epsilon = 1e-4));
}

#[test]
fn test_packing_corner_then_spreading() {
    // Edge alignments compose: left + back + top packs everything into
    // one corner of the container.
    let b = shelf();
    let mut crates = vec![
        Placed3::new(Point3::new(50.0, 20.0, 10.0), Size3::new(10.0, 10.0, 10.0)),
        Placed3::new(Point3::new(80.0, 30.0, 15.0), Size3::new(4.0, 4.0, 4.0)),
    ];

    space::align_left(&b, &mut crates);
    space::align_back(&b, &mut crates);
    space::align_top(&b, &mut crates);

    for item in &crates {
        let bounds = item.calc_bounds();
        assert_eq!(bounds.min_point(), Point3::new(0.0, 0.0, 0.0));
    }

    // A later distribution pass spreads them back out along x. The
    // smaller crate ended up at a lower x, so it takes the min slot.
    space::distribute_horizontal(&b, &mut crates);
    assert_eq!(crates[1].calc_bounds().min_x(), b.min_x());
    assert_eq!(crates[0].calc_bounds().max_x(), b.max_x());
}

#[test]
fn test_animated_arrangement_converges() {
    // Repeated low-factor passes approach the same layout a single
    // full-factor pass produces.
    let b = shelf();
    let start = vec![
        Placed3::new(Point3::new(90.0, 35.0, 3.0), Size3::new(10.0, 10.0, 10.0)),
        Placed3::new(Point3::new(12.0, 2.0, 18.0), Size3::new(20.0, 8.0, 6.0)),
    ];

    let mut snapped = start.clone();
    space::to_row_with(&b, &mut snapped, 1, 1.0);

    let mut eased = start;
    for _ in 0..60 {
        space::to_row_with(&b, &mut eased, 1, 0.25);
    }

    for (e, s) in eased.iter().zip(&snapped) {
        let delta = e.location().sub_point(s.location()).abs();
        assert!(delta.x() < 1e-3);
        assert!(delta.y() < 1e-3);
        assert!(delta.z() < 1e-3);
    }
}

#[test]
fn test_layer_stacking_in_custom_entity() {
    // Arrangement is trait-driven: a bare wrapper with its own anchor
    // convention participates without converting to Placed3.
    struct Slab {
        anchor: Point3,
        thickness: f32,
    }

    impl Spatial3 for Slab {
        fn location(&self) -> Point3 {
            self.anchor
        }

        fn calc_bounds(&self) -> Bounds3 {
            self.anchor.to_bounds(Size3::new(50.0, 50.0, self.thickness))
        }

        fn move_toward(&mut self, target: Point3, factor: f32) {
            self.anchor = self.anchor.mix(target, factor);
        }
    }

    let b = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(50.0, 50.0, 30.0));
    let mut slabs = vec![
        Slab { anchor: Point3::new(10.0, 10.0, 25.0), thickness: 2.0 },
        Slab { anchor: Point3::new(40.0, 40.0, 5.0), thickness: 10.0 },
    ];

    space::to_layer(&b, &mut slabs);

    for slab in &slabs {
        assert_eq!(slab.location().x(), 25.0);
        assert_eq!(slab.location().y(), 25.0);
    }
    // Sorted by z: the thin slab near the bottom was at z 25, the thick
    // one at z 5. Thick takes the top slot, thin the bottom.
    assert_eq!(slabs[1].calc_bounds().min_z(), 0.0);
    assert_eq!(slabs[0].calc_bounds().max_z(), 30.0);
}

#[test]
fn test_planar_grid_of_columns() {
    // Partition one container into vertical strips and lay a column out
    // in each, the way a dashboard splits panels.
    let page = Bounds2::new(Point2::new(0.0, 0.0), Point2::new(60.0, 40.0));
    let strip_a = Bounds2::new(Point2::new(0.0, 0.0), Point2::new(30.0, 40.0));
    let strip_b = Bounds2::new(Point2::new(30.0, 0.0), Point2::new(60.0, 40.0));

    let mut left = vec![
        Placed2::new(Point2::new(3.0, 31.0), Size2::new(10.0, 10.0)),
        Placed2::new(Point2::new(22.0, 4.0), Size2::new(10.0, 10.0)),
    ];
    let mut right = vec![
        Placed2::new(Point2::new(41.0, 8.0), Size2::new(6.0, 6.0)),
        Placed2::new(Point2::new(55.0, 30.0), Size2::new(6.0, 6.0)),
    ];

    plane::to_column(&strip_a, &mut left);
    plane::to_column(&strip_b, &mut right);

    for item in &left {
        assert_eq!(item.position().x(), 15.0);
    }
    for item in &right {
        assert_eq!(item.position().x(), 45.0);
    }

    // Every panel stays inside the page.
    for item in left.iter().chain(&right) {
        let bounds = item.position().to_bounds(item.size());
        assert!(bounds.min_x() >= page.min_x() && bounds.max_x() <= page.max_x());
        assert!(bounds.min_y() >= page.min_y() && bounds.max_y() <= page.max_y());
    }
}
