//! Tests for shape geometry, footprint bounds and placement records

#[cfg(test)]
mod tests {
    use brickqr::spatial::tiles::Footprint;
    use brickqr::{Color, Orientation, Placement, TileShape};

    // Tests area is the product of the dimensions
    // Verified by returning the sum instead
    #[test]
    fn test_area() {
        assert_eq!(TileShape::new("2x4", 2, 4).area(), 8);
        assert_eq!(TileShape::new("flat", 0, 4).area(), 0);
        assert_eq!(TileShape::new("huge", usize::MAX, 2).area(), usize::MAX);
    }

    // Tests candidates try the listed dimensions first, then the swapped ones
    // Verified by swapping the candidate order
    #[test]
    fn test_candidates_order() {
        let [normal, rotated] = TileShape::new("1x3", 1, 3).candidates(2, 4);

        assert_eq!(normal, (Orientation::Normal, Footprint::new(2, 4, 1, 3)));
        assert_eq!(rotated, (Orientation::Rotated, Footprint::new(2, 4, 3, 1)));
    }

    // Tests bounds containment including the exact edge and overflow
    // Verified by using a strict comparison at the edge
    #[test]
    fn test_fits_within() {
        assert!(Footprint::new(3, 0, 2, 5).fits_within(5));
        assert!(!Footprint::new(4, 0, 2, 1).fits_within(5));
        assert!(!Footprint::new(0, 4, 1, 2).fits_within(5));
        assert!(!Footprint::new(1, 0, usize::MAX, 1).fits_within(5));
        assert!(Footprint::new(5, 5, 0, 0).fits_within(5));
    }

    // Tests cell iteration is row-major and empty footprints yield nothing
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_cells() {
        let cells: Vec<(usize, usize)> = Footprint::new(1, 2, 2, 2).cells().collect();
        assert_eq!(cells, vec![(1, 2), (1, 3), (2, 2), (2, 3)]);

        let footprint = Footprint::new(0, 0, 0, 3);
        assert!(footprint.is_empty());
        assert_eq!(footprint.cells().count(), 0);
    }

    // Tests placements always carry the normal label with the occupied dimensions
    // Verified by propagating the candidate orientation
    #[test]
    fn test_placement_records_occupied_footprint() {
        let shape = TileShape::new("3623", 1, 3);
        let placement = Placement::new(&shape, Footprint::new(0, 1, 3, 1), Color::White);

        assert_eq!(placement.tile_id, "3623");
        assert_eq!(placement.width, 3);
        assert_eq!(placement.length, 1);
        assert_eq!(placement.orientation, Orientation::Normal);
        assert_eq!(placement.footprint(), Footprint::new(0, 1, 3, 1));
        assert_eq!(placement.area(), 3);
    }

    // Tests placements serialize with lowercase labels
    // Verified by removing the serde rename
    #[test]
    fn test_placement_json_labels() {
        let placement = Placement::new(
            &TileShape::new("3024", 1, 1),
            Footprint::new(0, 0, 1, 1),
            Color::Black,
        );

        let json = serde_json::to_string(&placement).unwrap();

        assert!(json.contains("\"color\":\"black\""));
        assert!(json.contains("\"orientation\":\"normal\""));
        let parsed: Placement = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, placement);
    }

    // Tests dark flags map to black
    // Verified by inverting from_dark
    #[test]
    fn test_color_from_dark() {
        assert_eq!(Color::from_dark(true), Color::Black);
        assert_eq!(Color::from_dark(false), Color::White);
        assert_eq!(Color::Black.name(), "black");
        assert_eq!(Color::White.name(), "white");
    }
}
