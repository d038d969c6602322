use crate::geometry::Coord;

/// Bounds of a set of cells as `(top_left, bottom_right)`, or `None` when empty
pub(crate) fn calculate_bounds(points: impl IntoIterator<Item = Coord>) -> Option<(Coord, Coord)> {
    let mut points = points.into_iter();
    let first = points.next()?;
    Some(points.fold((first, first), |(min, max), point| (min.min(point), max.max(point))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_of_scattered_points() {
        let bounds = calculate_bounds([Coord::new(4, 1), Coord::new(0, 7), Coord::new(2, 3)]);
        assert_eq!(bounds, Some((Coord::new(0, 1), Coord::new(4, 7))));
        assert_eq!(calculate_bounds(std::iter::empty()), None);
    }
}
