//! Extraction of repository payloads.
//!
//! Language list: repeated `<id>` elements anywhere under the root.
//! Segment list: repeated `<segment>` elements, each with `<source>`, `<target>`
//! and optional metadata children (`provider`, `owner`, `industry`,
//! `content_type`, `product`) that carry their value in a nested `<name>`.

use roxmltree::{Document, Node, NodeId};
use termlink_core::{
    CandidateSegment, LanguageSet, LocaleId, SegmentMetadata, TermError, TermResult,
};

fn parse_document(xml: &str) -> TermResult<Document<'_>> {
    Document::parse(xml).map_err(|e| TermError::MalformedResponse(format!("invalid XML: {e}")))
}

/// Concatenated text of the element and all of its descendants
fn element_value(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

/// Locale tags that fail to parse are skipped
pub fn parse_languages(xml: &str) -> TermResult<LanguageSet> {
    let doc = parse_document(xml)?;
    let mut languages = LanguageSet::new();

    for id in doc.descendants().filter(|n| n.has_tag_name("id")) {
        let tag = element_value(id);
        match LocaleId::parse(&tag) {
            Ok(locale) => {
                languages.insert(locale);
            }
            Err(e) => tracing::warn!("ignoring repository language {tag:?}: {e}"),
        }
    }

    Ok(languages)
}

/// Body of a segment lookup, kept unparsed until the caller walks it
#[derive(Debug, Clone)]
pub struct SegmentResponse {
    body: String,
}

impl SegmentResponse {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn segments(&self) -> TermResult<Segments<'_>> {
        parse_segments(&self.body)
    }
}

/// Segments in response order.
///
/// The document must be well formed up front, but each `<segment>` is only
/// extracted and checked when it is pulled.
pub struct Segments<'input> {
    doc: Document<'input>,
    ids: std::vec::IntoIter<NodeId>,
}

impl Iterator for Segments<'_> {
    type Item = TermResult<CandidateSegment>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.ids.next()?;
        let segment = self.doc.get_node(id)?;
        Some(parse_segment(segment))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

pub fn parse_segments(xml: &str) -> TermResult<Segments<'_>> {
    let doc = parse_document(xml)?;
    let ids: Vec<NodeId> = doc
        .descendants()
        .filter(|n| n.has_tag_name("segment"))
        .map(|n| n.id())
        .collect();

    Ok(Segments {
        doc,
        ids: ids.into_iter(),
    })
}

fn parse_segment(segment: Node) -> TermResult<CandidateSegment> {
    let required = |name: &str| {
        child(segment, name).map(element_value).ok_or_else(|| {
            TermError::MalformedResponse(format!("<segment> without <{name}>"))
        })
    };

    Ok(CandidateSegment {
        source: required("source")?,
        target: required("target")?,
        metadata: parse_metadata(segment),
    })
}

pub fn parse_metadata(segment: Node) -> SegmentMetadata {
    SegmentMetadata {
        provider: metadata_item(segment, "provider"),
        owner: metadata_item(segment, "owner"),
        industry: metadata_item(segment, "industry"),
        content_type: metadata_item(segment, "content_type"),
        product: metadata_item(segment, "product"),
    }
}

/// Value of `<{element}><name>..</name></{element}>`; any other shape is absent
pub fn metadata_item(segment: Node, element: &str) -> Option<String> {
    child(segment, element)
        .and_then(|container| child(container, "name"))
        .map(element_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(xml: &str) -> TermResult<Vec<CandidateSegment>> {
        parse_segments(xml)?.collect()
    }

    #[test]
    fn test_languages_skip_invalid_tags() {
        let xml = r#"<languages>
            <language><id>en-US</id><name>English</name></language>
            <language><id>fr-FR</id></language>
            <language><id>not a locale</id></language>
            <language><id></id></language>
        </languages>"#;
        let languages = parse_languages(xml).unwrap();
        assert_eq!(languages.len(), 2);
        assert!(languages.contains(&LocaleId::parse("en-US").unwrap()));
        assert!(languages.contains(&LocaleId::parse("fr-FR").unwrap()));
    }

    #[test]
    fn test_languages_empty() {
        assert!(parse_languages("<languages/>").unwrap().is_empty());
    }

    #[test]
    fn test_languages_malformed() {
        assert!(matches!(
            parse_languages("<languages><id>en</languages>"),
            Err(TermError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_segments_in_response_order() {
        let xml = r#"<response><segments>
            <segment><source>Hello</source><target>Bonjour</target></segment>
            <segment><source>hello</source><target>salut</target></segment>
            <segment><source>Hi</source><target>Coucou</target></segment>
        </segments></response>"#;
        let segments = collect(xml).unwrap();
        let sources: Vec<&str> = segments.iter().map(|s| s.source.as_str()).collect();
        assert_eq!(sources, vec!["Hello", "hello", "Hi"]);
        assert_eq!(segments[0].target, "Bonjour");
        assert!(segments[0].metadata.is_empty());
    }

    #[test]
    fn test_segments_none() {
        assert!(collect("<response><segments/></response>").unwrap().is_empty());
    }

    #[test]
    fn test_segment_without_target_is_malformed() {
        let xml = "<segments><segment><source>Hello</source></segment></segments>";
        match collect(xml) {
            Err(TermError::MalformedResponse(msg)) => assert!(msg.contains("target")),
            other => panic!("Expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_metadata_present_and_absent() {
        let xml = r#"<segments><segment>
            <source>Hello</source><target>Bonjour</target>
            <provider><name>Acme</name><id>7</id></provider>
            <owner/>
            <industry>Legal</industry>
            <content_type><name>UI</name></content_type>
        </segment></segments>"#;
        let segments = collect(xml).unwrap();
        let metadata = &segments[0].metadata;
        assert_eq!(metadata.provider.as_deref(), Some("Acme"));
        assert_eq!(metadata.owner, None);
        assert_eq!(metadata.industry, None);
        assert_eq!(metadata.content_type.as_deref(), Some("UI"));
        assert_eq!(metadata.product, None);
    }

    #[test]
    fn test_provider_without_name_is_absent() {
        let xml = "<segments><segment>\
            <source>a</source><target>b</target><provider/>\
            </segment></segments>";
        let segments = collect(xml).unwrap();
        assert_eq!(segments[0].metadata.provider, None);
    }

    #[test]
    fn test_entities_and_nested_text_are_decoded() {
        let xml = "<segments><segment>\
            <source>R&amp;D</source><target><b>F</b>&amp;E</target>\
            </segment></segments>";
        let segments = collect(xml).unwrap();
        assert_eq!(segments[0].source, "R&D");
        assert_eq!(segments[0].target, "F&E");
    }

    #[test]
    fn test_segments_are_checked_only_when_pulled() {
        let xml = "<s>\
            <segment><source>Hello</source><target>Bonjour</target></segment>\
            <segment><source>x</source></segment>\
            </s>";
        let mut segments = parse_segments(xml).unwrap();
        assert_eq!(segments.size_hint(), (2, Some(2)));

        let first = segments.next().unwrap().unwrap();
        assert_eq!(first.target, "Bonjour");
        assert!(matches!(
            segments.next(),
            Some(Err(TermError::MalformedResponse(_)))
        ));
        assert!(segments.next().is_none());
    }

    #[test]
    fn test_response_rejects_broken_document() {
        let response = SegmentResponse::new("<html><body>maintenance</html>");
        assert!(matches!(
            response.segments(),
            Err(TermError::MalformedResponse(_))
        ));
    }
}
