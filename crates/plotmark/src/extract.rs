//! Artwork bounds across the cut layers.

use log::{debug, trace, warn};

use plotmark_core::{artwork::ArtworkSource, geometry::Bounds};

/// Computes the bounding box of every anchor point on the named layers.
///
/// Names that do not resolve to a layer are skipped. Visibility is not
/// considered: a hidden cut layer still sizes the marker frame. When no
/// point is found the result is zero-sized [`Bounds::default()`].
///
/// # Examples
///
/// ```
/// # use plotmark::extract::compute_bounds;
/// # use plotmark_core::artwork::{Document, Layer, Path};
/// # use plotmark_core::geometry::Point;
/// let doc = Document::new(800.0).with_layer(
///     "KissCut",
///     Layer::new(vec![Path::new(vec![Point::new(0.0, 0.0), Point::new(100.0, 50.0)])]),
/// );
///
/// let bounds = compute_bounds(&doc, &["KissCut", "DieCut"]);
/// assert_eq!(bounds.width(), 100.0);
/// assert_eq!(bounds.height(), 50.0);
/// ```
pub fn compute_bounds<S>(source: &S, layer_names: &[&str]) -> Bounds
where
    S: ArtworkSource + ?Sized,
{
    let layers = layer_names.iter().filter_map(|&name| {
        let layer = source.layer(name);
        if layer.is_none() {
            debug!(layer = name; "Layer not found, skipping for bounds");
        }
        layer
    });

    let bounds = layers
        .filter_map(|layer| Bounds::from_points(layer.points()))
        .reduce(|acc, layer_bounds| acc.merge(&layer_bounds));
    trace!(bounds:?; "Artwork bounds");

    bounds.unwrap_or_else(|| {
        warn!("No anchor points on cut layers, using zero-sized bounds");
        Bounds::default()
    })
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use plotmark_core::{
        artwork::{Document, Layer, Path},
        geometry::Point,
    };

    use super::*;

    fn path(points: &[(f64, f64)]) -> Path {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    const CUT_LAYERS: [&str; 2] = ["KissCut", "DieCut"];

    #[test]
    fn test_bounds_span_both_cut_layers() {
        let doc = Document::new(800.0)
            .with_layer("KissCut", Layer::new(vec![path(&[(10.0, 20.0), (30.0, 40.0)])]))
            .with_layer("DieCut", Layer::new(vec![path(&[(5.0, 50.0), (60.0, 25.0)])]));

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_eq!(bounds.min_x(), 5.0);
        assert_eq!(bounds.min_y(), 20.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 50.0);
    }

    #[test]
    fn test_registration_layer_is_ignored() {
        let doc = Document::new(800.0)
            .with_layer("KissCut", Layer::new(vec![path(&[(0.0, 0.0), (10.0, 10.0)])]))
            .with_layer(
                "Regmark",
                Layer::new(vec![path(&[(-500.0, -500.0), (900.0, 900.0)])]),
            );

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_approx_eq!(f64, bounds.width(), 10.0);
        assert_approx_eq!(f64, bounds.height(), 10.0);
    }

    #[test]
    fn test_missing_layer_is_skipped() {
        let doc = Document::new(800.0)
            .with_layer("DieCut", Layer::new(vec![path(&[(1.0, 2.0), (4.0, 8.0)])]));

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 6.0);
    }

    #[test]
    fn test_hidden_layer_still_counts() {
        let doc = Document::new(800.0).with_layer(
            "KissCut",
            Layer::new(vec![path(&[(0.0, 0.0), (20.0, 5.0)])]).with_visible(false),
        );

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_eq!(bounds.width(), 20.0);
    }

    #[test]
    fn test_empty_paths_contribute_nothing() {
        let doc = Document::new(800.0).with_layer(
            "KissCut",
            Layer::new(vec![Path::default(), path(&[(2.0, 3.0), (6.0, 9.0)])]),
        );

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_eq!(bounds.min_x(), 2.0);
        assert_eq!(bounds.min_y(), 3.0);
    }

    #[test]
    fn test_layer_without_points_does_not_pull_bounds_to_origin() {
        let doc = Document::new(800.0)
            .with_layer("KissCut", Layer::new(vec![Path::default()]))
            .with_layer("DieCut", Layer::new(vec![path(&[(40.0, 30.0), (50.0, 60.0)])]));

        let bounds = compute_bounds(&doc, &CUT_LAYERS);
        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 30.0);
        assert_eq!(bounds.max_x(), 50.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_no_points_yields_zero_bounds() {
        let empty_doc = Document::new(800.0);
        let bounds = compute_bounds(&empty_doc, &CUT_LAYERS);
        assert_eq!(bounds, Bounds::default());
        assert!(bounds.width().is_finite());
        assert!(bounds.height().is_finite());

        let only_empty_paths =
            Document::new(800.0).with_layer("KissCut", Layer::new(vec![Path::default()]));
        assert_eq!(compute_bounds(&only_empty_paths, &CUT_LAYERS), Bounds::default());
    }
}
