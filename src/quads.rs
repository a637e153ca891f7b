mod proc_errors;
mod diagnostics;
mod point_spec;
mod quad;

use serde::Serialize;

use crate::geo_3d::Point;
use crate::io::xml::{self, XmlNode};

// Re-export errors
pub use proc_errors::{
    QuadError,
    ProcResult,
    err_str,
};
// Re-export diagnostics
pub use diagnostics::{
    Diagnostic,
    DiagnosticSink,
    LogSink,
    CollectSink,
};
pub use point_spec::PointSpec;
pub use quad::Quad;

/// Name of the root element of a quad file.
pub const ROOT_TAG: &str = "quads";
/// Name of a quad element.
pub const QUAD_TAG: &str = "quad";
/// Names of the four point attributes of a quad element.
pub const POINT_ATTRIBUTES: [&str; 4] = ["p0", "p1", "p2", "p3"];
/// Name of the optional invisibility attribute.
pub const INVISIBLE_ATTRIBUTE: &str = "invisible";

/// The quads of one track, in file order, with their bounding box.
/// Indices into the set are the ones used by `"n:p"` point references.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadSet {
    quads: Vec<Quad>,
    min: Point,
    max: Point,
}

/// What to do with one child of the root element.
enum ElementOutcome {
    Accept(Quad),
    Skip(Diagnostic),
}

impl QuadSet {
    /// An empty set. Bounds sit at `+inf` (min) and `-inf` (max).
    pub fn empty() -> Self {
        QuadSet{
            quads: Vec::new(),
            min: Point::pos_infinity(),
            max: Point::neg_infinity(),
        }
    }

    /// Build a set from quads already in memory.
    pub fn from_quads(quads: Vec<Quad>) -> Self {
        let mut quad_set = QuadSet::empty();
        for quad in quads {
            quad_set.push(quad);
        }
        quad_set
    }

    /// Load a quad file, logging diagnostics as warnings.
    pub fn load(path: &str) -> ProcResult<Self> {
        Self::load_with_sink(path, &mut LogSink)
    }

    /// Load a quad file, reporting diagnostics to `sink`.
    /// A file that cannot be read, or whose root is not `quads`, gives an empty set.
    /// Malformed points and bad indexed references fail the whole load.
    pub fn load_with_sink<S: DiagnosticSink>(path: &str, sink: &mut S) -> ProcResult<Self> {
        log::debug!("Loading quads from {}...", path);
        match xml::create_xml_tree(path) {
            Ok(root) => Self::from_xml_tree(&root, path, sink),
            Err(error) => {
                sink.report(Diagnostic::SourceNotFound{source: path.to_string(), cause: error.to_string()});
                Ok(QuadSet::empty())
            },
        }
    }

    /// Load quads from an XML document in memory.
    /// `source` names the document in diagnostics and errors.
    pub fn from_xml_str<S: DiagnosticSink>(text: &str, source: &str, sink: &mut S) -> ProcResult<Self> {
        match xml::parse_xml_str(text, source) {
            Ok(root) => Self::from_xml_tree(&root, source, sink),
            Err(error) => {
                sink.report(Diagnostic::SourceNotFound{source: source.to_string(), cause: error.to_string()});
                Ok(QuadSet::empty())
            },
        }
    }

    /// Load quads from a parsed document.
    pub fn from_xml_tree<S: DiagnosticSink>(root: &XmlNode, source: &str, sink: &mut S) -> ProcResult<Self> {
        if root.get_name() != ROOT_TAG {
            sink.report(Diagnostic::InvalidRoot{source: source.to_string(), found: root.get_name().to_string()});
            return Ok(QuadSet::empty());
        }

        // Built aside so an error leaves nothing behind
        let mut quad_set = QuadSet::empty();
        for node in root.nodes() {
            match quad_set.read_element(node, source)? {
                ElementOutcome::Accept(quad) => quad_set.push(quad),
                ElementOutcome::Skip(diagnostic) => sink.report(diagnostic),
            }
        }

        log::debug!("Loaded {} quads from {}", quad_set.quad_count(), source);
        Ok(quad_set)
    }

    /// Turn one child element into a quad, resolving references against the quads loaded so far.
    fn read_element(&self, node: &XmlNode, source: &str) -> ProcResult<ElementOutcome> {
        if node.get_name() != QUAD_TAG {
            return Ok(ElementOutcome::Skip(Diagnostic::UnexpectedElement{
                source: source.to_string(),
                tag: node.get_name().to_string(),
            }));
        }

        let quad_idx = self.quads.len();
        let mut points = [Point::zero(); 4];
        for (point, attribute) in points.iter_mut().zip(POINT_ATTRIBUTES) {
            *point = self.read_point(node, attribute, quad_idx, source)?;
        }

        let invisible = match node.get_attr_bool(INVISIBLE_ATTRIBUTE, false) {
            Some(invisible) => invisible,
            None => return Err(QuadError::MalformedAttribute{
                source: source.to_string(),
                quad: quad_idx,
                attribute: INVISIBLE_ATTRIBUTE.to_string(),
                value: node.get_attr_str(INVISIBLE_ATTRIBUTE).unwrap_or_default().to_string(),
            }),
        };

        Ok(ElementOutcome::Accept(Quad::new(points, invisible)))
    }

    fn read_point(&self, node: &XmlNode, attribute: &str, quad_idx: usize, source: &str) -> ProcResult<Point> {
        let value = match node.get_attr_str(attribute) {
            Some(value) => value,
            None => return Err(QuadError::MissingAttribute{
                source: source.to_string(),
                quad: quad_idx,
                attribute: attribute.to_string(),
            }),
        };

        let malformed = || QuadError::MalformedPoint{
            source: source.to_string(),
            quad: quad_idx,
            attribute: attribute.to_string(),
            value: value.to_string(),
        };

        if !PointSpec::is_indexed(value) {
            return node.get_attr_point(attribute).flatten().ok_or_else(malformed);
        }

        let (quad, vertex) = PointSpec::parse_indexed(value).ok_or_else(malformed)?;
        PointSpec::Indexed{quad, vertex}
            .resolve(&self.quads)
            .ok_or_else(|| QuadError::IndexOutOfRange{
                source: source.to_string(),
                quad: quad_idx,
                attribute: attribute.to_string(),
                ref_quad: quad,
                ref_vertex: vertex,
                loaded: self.quads.len(),
            })
    }

    /// Append a quad and grow the bounds around its vertices.
    fn push(&mut self, quad: Quad) {
        for point in quad.points() {
            self.min = self.min.component_min(point);
            self.max = self.max.component_max(point);
        }
        self.quads.push(quad);
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Get quad `i`, or `None` past the end.
    pub fn quad_at(&self, i: usize) -> Option<&Quad> {
        self.quads.get(i)
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Component-wise minimum over all vertices. `+inf` for an empty set.
    pub fn min_bounds(&self) -> Point {
        self.min
    }

    /// Component-wise maximum over all vertices. `-inf` for an empty set.
    pub fn max_bounds(&self) -> Point {
        self.max
    }

    /// Index of the first quad containing `point` on the x/z plane.
    pub fn find_quad(&self, point: &Point) -> Option<usize> {
        if self.is_empty()
            || point.x < self.min.x || point.x > self.max.x
            || point.z < self.min.z || point.z > self.max.z
        {
            return None;
        }
        self.quads.iter().position(|quad| quad.point_in_quad(point))
    }

    /// Write the set back as a quad document.
    /// Every point is written in literal form, so the document has no references.
    pub fn to_xml_tree(&self) -> XmlNode {
        let mut root = XmlNode::new(ROOT_TAG);
        for quad in self.quads.iter() {
            let mut node = XmlNode::new(QUAD_TAG);
            for (point, attribute) in quad.points().iter().zip(POINT_ATTRIBUTES) {
                node.set_attr(attribute, &point.to_literal());
            }
            if quad.is_invisible() {
                node.set_attr(INVISIBLE_ATTRIBUTE, "true");
            }
            root.add_node(node);
        }
        root
    }

    /// Summary of the set for reports.
    pub fn summary(&self, source: &str, include_quads: bool) -> QuadSetSummary {
        QuadSetSummary{
            source: source.to_string(),
            quad_count: self.quad_count(),
            invisible_count: self.quads.iter().filter(|quad| quad.is_invisible()).count(),
            min: if self.is_empty() { None } else { Some(self.min) },
            max: if self.is_empty() { None } else { Some(self.max) },
            quads: if include_quads { Some(self.quads.clone()) } else { None },
        }
    }
}
impl Default for QuadSet {
    fn default() -> Self {
        QuadSet::empty()
    }
}

/// Serializable overview of a quad set.
/// Bounds are left out for an empty set.
#[derive(Debug, Serialize)]
pub struct QuadSetSummary {
    pub source: String,
    pub quad_count: usize,
    pub invisible_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quads: Option<Vec<Quad>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRACK: &str = r#"<?xml version="1.0"?>
<quads>
  <quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
  <quad p0="0:2" p1="0:3" p2="-2 5 1" p3="3,-1,4" invisible="true"/>
</quads>
"#;

    fn load_str(text: &str) -> (ProcResult<QuadSet>, CollectSink) {
        let mut sink = CollectSink::new();
        let result = QuadSet::from_xml_str(text, "test.xml", &mut sink);
        (result, sink)
    }

    fn quads_doc(body: &str) -> String {
        format!("<quads>{}</quads>", body)
    }

    #[test]
    fn load_literal_and_indexed() {
        let (result, sink) = load_str(TRACK);
        let quad_set = result.unwrap();
        assert!(sink.diagnostics.is_empty());
        assert_eq!(quad_set.quad_count(), 2);

        let first = quad_set.quad_at(0).unwrap();
        assert_eq!(first[0], Point::new(0.0, 0.0, 0.0));
        assert!(!first.is_invisible());

        let second = quad_set.quad_at(1).unwrap();
        assert_eq!(second[0], Point::new(1.0, 1.0, 0.0));
        assert_eq!(second[1], Point::new(0.0, 1.0, 0.0));
        assert_eq!(second[2], Point::new(-2.0, 5.0, 1.0));
        assert!(second.is_invisible());

        assert!(quad_set.quad_at(2).is_none());
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let quad_set = load_str(TRACK).0.unwrap();
        assert_eq!(quad_set.min_bounds(), Point::new(-2.0, -1.0, 0.0));
        assert_eq!(quad_set.max_bounds(), Point::new(3.0, 5.0, 4.0));

        for quad in quad_set.quads() {
            for point in quad.points() {
                assert!(quad_set.min_bounds().x <= point.x && point.x <= quad_set.max_bounds().x);
                assert!(quad_set.min_bounds().y <= point.y && point.y <= quad_set.max_bounds().y);
                assert!(quad_set.min_bounds().z <= point.z && point.z <= quad_set.max_bounds().z);
            }
        }
    }

    #[test]
    fn unexpected_elements_are_skipped() {
        let doc = quads_doc(r#"
            <checkline p0="0,0,0"/>
            <quad p0="0,0,0" p1="1,0,0" p2="1,0,1" p3="0,0,1"/>
            <quad_group/>
            <quad p0="0:3" p1="0:2" p2="1,0,2" p3="0,0,2"/>
        "#);
        let (result, sink) = load_str(&doc);
        let quad_set = result.unwrap();
        assert_eq!(quad_set.quad_count(), 2);
        assert_eq!(sink.diagnostics, vec![
            Diagnostic::UnexpectedElement{source: "test.xml".to_string(), tag: "checkline".to_string()},
            Diagnostic::UnexpectedElement{source: "test.xml".to_string(), tag: "quad_group".to_string()},
        ]);
        // Skipped elements do not take an index
        assert_eq!(quad_set.quad_at(1).unwrap()[0], Point::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn missing_file_is_empty() {
        let mut sink = CollectSink::new();
        let quad_set = QuadSet::load_with_sink("tests/data/does_not_exist.xml", &mut sink).unwrap();
        assert_eq!(quad_set.quad_count(), 0);
        assert!(quad_set.is_empty());
        assert_eq!(quad_set.min_bounds(), Point::pos_infinity());
        assert_eq!(quad_set.max_bounds(), Point::neg_infinity());
        assert_eq!(sink.diagnostics.len(), 1);
        assert!(matches!(&sink.diagnostics[0], Diagnostic::SourceNotFound{source, ..} if source == "tests/data/does_not_exist.xml"));
    }

    #[test]
    fn wrong_root_is_empty() {
        let (result, sink) = load_str(r#"<track><quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/></track>"#);
        let quad_set = result.unwrap();
        assert_eq!(quad_set, QuadSet::empty());
        assert_eq!(sink.diagnostics, vec![
            Diagnostic::InvalidRoot{source: "test.xml".to_string(), found: "track".to_string()},
        ]);
    }

    #[test]
    fn unparseable_document_is_empty() {
        let (result, sink) = load_str("<quads><quad>");
        assert!(result.unwrap().is_empty());
        assert!(matches!(sink.diagnostics[0], Diagnostic::SourceNotFound{..}));
    }

    #[test]
    fn empty_root_has_sentinel_bounds() {
        let (result, sink) = load_str("<quads/>");
        let quad_set = result.unwrap();
        assert!(sink.diagnostics.is_empty());
        assert_eq!(quad_set.quad_count(), 0);
        assert_eq!(quad_set.min_bounds().x, f32::INFINITY);
        assert_eq!(quad_set.max_bounds().z, f32::NEG_INFINITY);
    }

    #[test]
    fn leading_colon_is_malformed_literal() {
        let doc = quads_doc(r#"
            <quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
            <quad p0=":5" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
        "#);
        match load_str(&doc).0 {
            Err(QuadError::MalformedPoint { quad, attribute, value, .. }) => {
                assert_eq!(quad, 1);
                assert_eq!(attribute, "p0");
                assert_eq!(value, ":5");
            },
            other => panic!("Expected a malformed point, got {:?}", other),
        }
    }

    #[test]
    fn malformed_literal_fails_load() {
        let doc = quads_doc(r#"<quad p0="0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>"#);
        assert!(matches!(load_str(&doc).0, Err(QuadError::MalformedPoint{..})));
    }

    #[test]
    fn non_finite_literal_fails_load() {
        for value in ["nan,0,0", "inf,0,0", "0,-Infinity,0"] {
            let doc = quads_doc(&format!(
                r#"<quad p0="{}" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>"#, value));
            match load_str(&doc).0 {
                Err(QuadError::MalformedPoint { attribute, value: found, .. }) => {
                    assert_eq!(attribute, "p0");
                    assert_eq!(found, value);
                },
                other => panic!("Expected a malformed point for {}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn malformed_index_fails_load() {
        let doc = quads_doc(r#"
            <quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
            <quad p0="0:x" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
        "#);
        assert!(matches!(load_str(&doc).0, Err(QuadError::MalformedPoint{quad: 1, ..})));
    }

    #[test]
    fn prefixed_tags_are_not_quads() {
        let (result, sink) = load_str(
            r#"<ns:quads xmlns:ns="urn:track"><quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/></ns:quads>"#);
        assert!(result.unwrap().is_empty());
        assert_eq!(sink.diagnostics, vec![
            Diagnostic::InvalidRoot{source: "test.xml".to_string(), found: "ns:quads".to_string()},
        ]);

        let (result, sink) = load_str(
            r#"<quads xmlns:ns="urn:track"><ns:quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/></quads>"#);
        assert!(result.unwrap().is_empty());
        assert_eq!(sink.diagnostics, vec![
            Diagnostic::UnexpectedElement{source: "test.xml".to_string(), tag: "ns:quad".to_string()},
        ]);
    }

    #[test]
    fn forward_reference_fails_load() {
        let doc = quads_doc(r#"
            <quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
            <quad p0="1:0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
        "#);
        match load_str(&doc).0 {
            Err(QuadError::IndexOutOfRange { quad, ref_quad, ref_vertex, loaded, .. }) => {
                assert_eq!((quad, ref_quad, ref_vertex, loaded), (1, 1, 0, 1));
            },
            other => panic!("Expected an index error, got {:?}", other),
        }
    }

    #[test]
    fn vertex_index_past_three_fails_load() {
        let doc = quads_doc(r#"
            <quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
            <quad p0="0:4" p1="1,0,0" p2="1,1,0" p3="0,1,0"/>
        "#);
        assert!(matches!(load_str(&doc).0, Err(QuadError::IndexOutOfRange{ref_vertex: 4, ..})));
    }

    #[test]
    fn missing_point_fails_load() {
        let doc = quads_doc(r#"<quad p0="0,0,0" p1="1,0,0" p2="1,1,0"/>"#);
        match load_str(&doc).0 {
            Err(QuadError::MissingAttribute { attribute, .. }) => assert_eq!(attribute, "p3"),
            other => panic!("Expected a missing attribute, got {:?}", other),
        }
    }

    #[test]
    fn bad_invisible_flag_fails_load() {
        let doc = quads_doc(r#"<quad p0="0,0,0" p1="1,0,0" p2="1,1,0" p3="0,1,0" invisible="sometimes"/>"#);
        assert!(matches!(load_str(&doc).0, Err(QuadError::MalformedAttribute{..})));
    }

    #[test]
    fn xml_round_trip() {
        let quad_set = load_str(TRACK).0.unwrap();
        let text = quad_set.to_xml_tree().to_xml_string(true).unwrap();

        let (result, sink) = load_str(&text);
        let reloaded = result.unwrap();
        assert!(sink.diagnostics.is_empty());
        assert_eq!(reloaded, quad_set);
        assert_eq!(reloaded.min_bounds(), quad_set.min_bounds());
        assert_eq!(reloaded.max_bounds(), quad_set.max_bounds());
    }

    #[test]
    fn written_points_are_literal() {
        let quad_set = load_str(TRACK).0.unwrap();
        let tree = quad_set.to_xml_tree();
        let second = tree.get_node(1).unwrap();
        assert_eq!(second.get_attr_str("p0"), Some("1,1,0"));
        assert_eq!(second.get_attr_str("invisible"), Some("true"));
        assert_eq!(tree.get_node(0).unwrap().get_attr_str("invisible"), None);
    }

    #[test]
    fn find_quad_on_ground() {
        let quad_set = QuadSet::from_quads(vec![
            Quad::new([
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 1.0),
                Point::new(0.0, 0.0, 1.0),
            ], false),
            Quad::new([
                Point::new(0.0, 0.0, 1.0),
                Point::new(1.0, 0.0, 1.0),
                Point::new(1.0, 0.5, 2.0),
                Point::new(0.0, 0.5, 2.0),
            ], false),
        ]);
        assert_eq!(quad_set.find_quad(&Point::new(0.5, 0.0, 0.5)), Some(0));
        assert_eq!(quad_set.find_quad(&Point::new(0.5, 3.0, 1.5)), Some(1));
        assert_eq!(quad_set.find_quad(&Point::new(2.0, 0.0, 0.5)), None);
        assert_eq!(QuadSet::empty().find_quad(&Point::zero()), None);
    }

    #[test]
    fn summary_counts() {
        let quad_set = load_str(TRACK).0.unwrap();
        let summary = quad_set.summary("test.xml", false);
        assert_eq!(summary.quad_count, 2);
        assert_eq!(summary.invisible_count, 1);
        assert_eq!(summary.min, Some(Point::new(-2.0, -1.0, 0.0)));
        assert!(summary.quads.is_none());

        let summary = QuadSet::empty().summary("empty.xml", true);
        assert!(summary.min.is_none() && summary.max.is_none());
        assert_eq!(summary.quads.map(|quads| quads.len()), Some(0));
    }

    #[test]
    fn independent_loads_in_parallel() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| {
                let mut sink = CollectSink::new();
                QuadSet::from_xml_str(TRACK, "thread.xml", &mut sink).unwrap().quad_count()
            }))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }
}
