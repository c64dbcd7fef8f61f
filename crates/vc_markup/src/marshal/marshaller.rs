use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use vc_reflect::Reflect;
use vc_reflect::info::DynamicTypePath;
use vc_reflect::ops::{AccessError, List, ReflectRef, Struct};

use super::MarshalReport;
use super::naming::{element_name, logical_name, normalize};
use crate::{AttributeRegistry, HierarchicalWriter, MarshalConfig, MarshalError, TypeClassifier};

// -----------------------------------------------------------------------------
// Marshaller

/// Walks a reflected value and emits it into a [`HierarchicalWriter`].
///
/// The marshaller borrows an [`AttributeRegistry`] that must be fully
/// populated beforehand. It holds no other state, so one marshaller can be
/// used for any number of marshals, and the same value always produces the
/// same calls.
///
/// # Examples
///
/// ```
/// use vc_markup::{AttributeRegistry, EventWriter, HierarchicalWriter, Marshaller, WriterEvent};
/// use vc_reflect::derive::Reflect;
///
/// #[derive(Reflect)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let mut registry = AttributeRegistry::new();
/// registry.register::<Person>("age");
///
/// let person = Person { name: "wubp".into(), age: 29 };
/// let mut writer = EventWriter::new();
///
/// writer.start_node("person");
/// Marshaller::new(&registry).marshal(&person, &mut writer).unwrap();
/// writer.end_node();
///
/// assert_eq!(writer.events(), [
///     WriterEvent::StartNode("person".into()),
///     WriterEvent::AddAttribute("age".into(), "29".into()),
///     WriterEvent::StartNode("name".into()),
///     WriterEvent::SetText("wubp".into()),
///     WriterEvent::EndNode,
///     WriterEvent::EndNode,
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Marshaller<'r> {
    classifier: TypeClassifier<'r>,
    config: MarshalConfig,
}

impl<'r> Marshaller<'r> {
    /// Creates a marshaller with the default [`MarshalConfig`].
    #[inline]
    pub fn new(registry: &'r AttributeRegistry) -> Self {
        Self::with_config(registry, MarshalConfig::default())
    }

    #[inline]
    pub fn with_config(registry: &'r AttributeRegistry, config: MarshalConfig) -> Self {
        Self {
            classifier: TypeClassifier::new(registry),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &MarshalConfig {
        &self.config
    }

    #[inline]
    pub fn classifier(&self) -> TypeClassifier<'r> {
        self.classifier
    }

    /// Emits `value` into `writer`, relative to the node currently open.
    ///
    /// Attributes of `value` go onto that open node. Accessor failures are
    /// logged and rendered as null; they never abort the marshal.
    ///
    /// # Errors
    ///
    /// [`MarshalError::DepthExceeded`] if the graph nests more than
    /// [`MarshalConfig::max_depth`] nodes. The nodes opened so far are
    /// closed before returning.
    #[inline]
    pub fn marshal(
        &self,
        value: &dyn Reflect,
        writer: &mut dyn HierarchicalWriter,
    ) -> Result<(), MarshalError> {
        self.marshal_with_report(value, writer).map(|_| ())
    }

    /// Like [`marshal`](Self::marshal), also returning what was emitted and
    /// which accessors failed.
    pub fn marshal_with_report(
        &self,
        value: &dyn Reflect,
        writer: &mut dyn HierarchicalWriter,
    ) -> Result<MarshalReport, MarshalError> {
        let mut walk = Walk {
            classifier: self.classifier,
            config: &self.config,
            writer,
            depth: 0,
            report: MarshalReport::default(),
        };
        walk.value(value)?;
        Ok(walk.report)
    }
}

// -----------------------------------------------------------------------------
// Walk

/// The state of one marshal.
struct Walk<'a, 'r> {
    classifier: TypeClassifier<'r>,
    config: &'a MarshalConfig,
    writer: &'a mut dyn HierarchicalWriter,
    depth: usize,
    report: MarshalReport,
}

impl Walk<'_, '_> {
    fn value(&mut self, value: &dyn Reflect) -> Result<(), MarshalError> {
        match value.reflect_ref() {
            ReflectRef::Null => Ok(()),
            ReflectRef::Primitive(primitive) => {
                self.set_text(&primitive.to_text());
                Ok(())
            }
            ReflectRef::List(list) => self.list(list),
            ReflectRef::Struct(value) => {
                self.attributes(value);
                self.members(value)
            }
            ReflectRef::Opaque(value) => {
                log::debug!(
                    "`{}` is neither primitive, sequence nor struct, rendered as empty text",
                    value.reflect_type_path(),
                );
                self.set_text("");
                Ok(())
            }
        }
    }

    // Elements become sibling nodes of the open node.
    fn list(&mut self, list: &dyn List) -> Result<(), MarshalError> {
        for item in list.iter() {
            let ident = item.represented_type_info().resolve().type_ident();
            let name = element_name(ident, self.config.element_naming);
            self.node(&name, |walk| walk.value(item))?;
        }
        Ok(())
    }

    // Attributes land on the open node, before any of its children.
    fn attributes(&mut self, value: &dyn Struct) {
        let owner = value.ty_id();
        if !self.classifier.has_attributes(owner) {
            return;
        }

        // Accessors that normalize to the same name yield one attribute.
        let mut emitted: Vec<Cow<'_, str>> = Vec::new();
        for member in value.members() {
            let name = normalize(logical_name(member.name(), &self.config.getter_prefix));
            if !self.classifier.is_attribute(owner, &name) || emitted.contains(&name) {
                continue;
            }
            let text = match member.invoke() {
                Ok(value) => self.text_of(value.as_reflect()),
                Err(err) => {
                    self.absorb(err);
                    String::new()
                }
            };
            self.writer.add_attribute(&name, &text);
            self.report.attributes += 1;
            emitted.push(name);
        }
    }

    fn members(&mut self, value: &dyn Struct) -> Result<(), MarshalError> {
        let owner = value.ty_id();

        for member in value.members() {
            let logical = logical_name(member.name(), &self.config.getter_prefix);

            if self.classifier.is_primitive(&member.declared_type()) {
                let name = normalize(logical);
                if self.classifier.is_attribute(owner, &name) {
                    continue;
                }
                let text = match member.invoke() {
                    Ok(value) => self.text_of(value.as_reflect()),
                    Err(err) => {
                        self.absorb(err);
                        String::new()
                    }
                };
                self.node(&name, |walk| {
                    walk.set_text(&text);
                    Ok(())
                })?;
            } else {
                self.node(logical, |walk| match member.invoke() {
                    Ok(value) => walk.value(value.as_reflect()),
                    Err(err) => {
                        walk.absorb(err);
                        Ok(())
                    }
                })?;
            }
        }
        Ok(())
    }

    /// Opens `name`, runs `body` inside it and closes it again, also when
    /// `body` fails.
    fn node(
        &mut self,
        name: &str,
        body: impl FnOnce(&mut Self) -> Result<(), MarshalError>,
    ) -> Result<(), MarshalError> {
        if self.depth >= self.config.max_depth {
            log::warn!(
                "object graph deeper than {} nodes, stopped at node `{name}`",
                self.config.max_depth,
            );
            return Err(MarshalError::DepthExceeded {
                max_depth: self.config.max_depth,
                node: name.into(),
            });
        }

        log::trace!("start node `{name}` at depth {}", self.depth);
        self.writer.start_node(name);
        self.depth += 1;
        self.report.nodes += 1;
        self.report.max_depth = self.report.max_depth.max(self.depth);

        let result = body(self);

        self.depth -= 1;
        self.writer.end_node();
        result
    }

    fn set_text(&mut self, text: &str) {
        self.writer.set_text(text);
        self.report.texts += 1;
    }

    // The text of a primitive-typed member or attribute value.
    fn text_of(&self, value: &dyn Reflect) -> String {
        match value.reflect_ref() {
            ReflectRef::Primitive(primitive) => primitive.to_text(),
            ReflectRef::Null => String::new(),
            other => {
                log::debug!(
                    "`{}` ({}) has no text form, rendered as empty text",
                    value.reflect_type_path(),
                    other.kind(),
                );
                String::new()
            }
        }
    }

    fn absorb(&mut self, err: AccessError) {
        log::warn!("{err}, rendered as null");
        self.report.failures.push(err);
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec;
    use alloc::vec::Vec;

    use vc_reflect::Reflect;
    use vc_reflect::derive::Reflect;
    use vc_reflect::info::{TypeInfo, TypeKind, TypePath, Typed};
    use vc_reflect::ops::{AccessError, Accessor, MemberValue, ReflectRef, Struct};

    use super::Marshaller;
    use crate::WriterEvent::{AddAttribute, EndNode, SetText, StartNode};
    use crate::{
        AttributeRegistry, ElementNaming, EventWriter, HierarchicalWriter, MarshalConfig,
        MarshalError, WriterEvent,
    };

    #[derive(Reflect)]
    struct Person {
        name: String,
        age: u32,
    }

    #[derive(Reflect)]
    struct Address {
        city: String,
    }

    #[derive(Reflect)]
    struct Customer {
        #[reflect(rename = "Name")]
        name: String,
        home: Option<Address>,
        friends: Vec<Person>,
    }

    #[derive(Reflect)]
    struct Chain {
        next: Option<Box<Chain>>,
    }

    #[derive(Reflect)]
    struct Tagged {
        label: Option<String>,
        payload: (),
    }

    /// A getter-style type whose `getBalance` accessor fails.
    struct Account {
        id: u64,
    }

    impl TypePath for Account {
        fn type_path() -> &'static str {
            "bank::Account"
        }
        fn type_name() -> &'static str {
            "Account"
        }
        fn type_ident() -> &'static str {
            "Account"
        }
    }

    impl Typed for Account {
        fn type_info() -> TypeInfo {
            TypeInfo::new::<Self>(TypeKind::Struct)
        }
    }

    impl Reflect for Account {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Struct(self)
        }
    }

    impl Struct for Account {
        fn accessor_len(&self) -> usize {
            3
        }

        fn accessor_at(&self, index: usize) -> Option<Accessor> {
            match index {
                0 => Some(Accessor::new::<u64>("getId")),
                1 => Some(Accessor::new::<f64>("getBalance")),
                2 => Some(Accessor::new::<Address>("getBranch")),
                _ => None,
            }
        }

        fn invoke(&self, index: usize) -> Result<MemberValue<'_>, AccessError> {
            match index {
                0 => Ok(MemberValue::Borrowed(&self.id)),
                1 => Err(AccessError::failed(
                    "bank::Account",
                    "getBalance",
                    "ledger offline",
                )),
                2 => Err(AccessError::failed(
                    "bank::Account",
                    "getBranch",
                    "ledger offline",
                )),
                _ => Err(AccessError::OutOfRange {
                    type_path: "bank::Account",
                    index,
                }),
            }
        }
    }

    /// Exposes `Code` and `code`, which only differ in case.
    struct Coded;

    impl TypePath for Coded {
        fn type_path() -> &'static str {
            "stock::Coded"
        }
        fn type_name() -> &'static str {
            "Coded"
        }
        fn type_ident() -> &'static str {
            "Coded"
        }
    }

    impl Typed for Coded {
        fn type_info() -> TypeInfo {
            TypeInfo::new::<Self>(TypeKind::Struct)
        }
    }

    impl Reflect for Coded {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Struct(self)
        }
    }

    impl Struct for Coded {
        fn accessor_len(&self) -> usize {
            2
        }

        fn accessor_at(&self, index: usize) -> Option<Accessor> {
            match index {
                0 => Some(Accessor::new::<&'static str>("Code")),
                1 => Some(Accessor::new::<&'static str>("code")),
                _ => None,
            }
        }

        fn invoke(&self, index: usize) -> Result<MemberValue<'_>, AccessError> {
            match index {
                0 => Ok(MemberValue::Owned(Box::new("A1"))),
                1 => Ok(MemberValue::Owned(Box::new("B2"))),
                _ => Err(AccessError::OutOfRange {
                    type_path: "stock::Coded",
                    index,
                }),
            }
        }
    }

    fn person(name: &str, age: u32) -> Person {
        Person {
            name: name.into(),
            age,
        }
    }

    fn start(name: &str) -> WriterEvent {
        StartNode(name.into())
    }

    fn text(value: &str) -> WriterEvent {
        SetText(value.into())
    }

    fn attr(name: &str, value: &str) -> WriterEvent {
        AddAttribute(name.into(), value.into())
    }

    fn run(marshaller: &Marshaller, value: &dyn Reflect) -> Vec<WriterEvent> {
        let mut writer = EventWriter::new();
        marshaller.marshal(value, &mut writer).unwrap();
        writer.into_events()
    }

    #[test]
    fn primitive_root_sets_text_only() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        assert_eq!(run(&m, &42_i32), [text("42")]);
        assert_eq!(run(&m, &true), [text("true")]);
        assert_eq!(run(&m, &Cow::Borrowed("a<b")), [text("a<b")]);
    }

    #[test]
    fn null_root_emits_nothing() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let mut writer = EventWriter::new();
        writer.start_node("x");
        m.marshal(&None::<Person>, &mut writer).unwrap();
        assert_eq!(writer.events(), [start("x")]);
    }

    #[test]
    fn attribute_replaces_child_node() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Person>("age");
        let m = Marshaller::new(&registry);

        assert_eq!(
            run(&m, &person("wubp", 29)),
            [attr("age", "29"), start("name"), text("wubp"), EndNode]
        );
    }

    #[test]
    fn without_registration_all_members_are_nodes() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        assert_eq!(
            run(&m, &person("wubp", 29)),
            [
                start("name"),
                text("wubp"),
                EndNode,
                start("age"),
                text("29"),
                EndNode,
            ]
        );
    }

    #[test]
    fn sequence_flattens_into_siblings() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let people = vec![person("a", 1), person("b", 2)];
        let events = run(&m, &people);

        let starts: Vec<_> = events
            .iter()
            .filter(|e| matches!(e, StartNode(name) if name == "person"))
            .collect();
        assert_eq!(starts.len(), 2);
        assert_eq!(events.first(), Some(&start("person")));
        assert_eq!(events.last(), Some(&EndNode));

        let empty: Vec<Person> = vec![];
        assert!(run(&m, &empty).is_empty());
    }

    #[test]
    fn two_people_with_registered_age() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Person>("age");
        let m = Marshaller::new(&registry);

        let people = vec![person("wubp", 29), person("lin", 31)];
        assert_eq!(
            run(&m, &people),
            [
                start("person"),
                attr("age", "29"),
                start("name"),
                text("wubp"),
                EndNode,
                EndNode,
                start("person"),
                attr("age", "31"),
                start("name"),
                text("lin"),
                EndNode,
                EndNode,
            ]
        );
    }

    #[test]
    fn accessors_with_equal_normalized_names_give_one_attribute() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Coded>("code");
        let m = Marshaller::new(&registry);

        let events = run(&m, &Coded);
        assert_eq!(events, [attr("code", "A1")]);
    }

    #[test]
    fn element_naming_by_type_name() {
        let registry = AttributeRegistry::new();
        let config = MarshalConfig::default().with_element_naming(ElementNaming::TypeName);
        let m = Marshaller::with_config(&registry, config);

        let values = vec![1_u8, 2];
        assert_eq!(
            run(&m, &values),
            [start("u8"), text("1"), EndNode, start("u8"), text("2"), EndNode]
        );
    }

    #[test]
    fn heterogeneous_sequence_uses_runtime_types() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let values: Vec<Box<dyn Reflect>> = vec![
            Box::new(String::from("s")),
            Box::new(person("p", 3)),
            Box::new(None::<Address>),
        ];
        let events = run(&m, &values);

        assert_eq!(events[0], start("string"));
        assert_eq!(events[3], start("person"));
        assert_eq!(&events[events.len() - 2..], [start("address"), EndNode]);
    }

    #[test]
    fn composite_members_keep_their_name() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Address>("city");
        let m = Marshaller::new(&registry);

        let customer = Customer {
            name: "c".into(),
            home: Some(Address { city: "Paris".into() }),
            friends: vec![person("f", 7)],
        };

        assert_eq!(
            run(&m, &customer),
            [
                start("name"),
                text("c"),
                EndNode,
                start("home"),
                attr("city", "Paris"),
                EndNode,
                start("friends"),
                start("person"),
                start("name"),
                text("f"),
                EndNode,
                start("age"),
                text("7"),
                EndNode,
                EndNode,
                EndNode,
            ]
        );
    }

    #[test]
    fn null_composite_member_is_empty_node() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let customer = Customer {
            name: "c".into(),
            home: None,
            friends: vec![],
        };
        let events = run(&m, &customer);

        assert_eq!(&events[3..], [start("home"), EndNode, start("friends"), EndNode]);
    }

    #[test]
    fn null_primitive_member_has_empty_text() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let events = run(
            &m,
            &Tagged {
                label: None,
                payload: (),
            },
        );
        assert_eq!(
            events,
            [start("label"), text(""), EndNode, start("payload"), text(""), EndNode]
        );
    }

    #[test]
    fn failing_accessors_are_absorbed() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Account>("balance");
        let config = MarshalConfig::default().with_getter_prefix("get");
        let m = Marshaller::with_config(&registry, config);

        let mut writer = EventWriter::new();
        let report = m
            .marshal_with_report(&Account { id: 9 }, &mut writer)
            .unwrap();

        assert_eq!(
            writer.events(),
            [
                attr("balance", ""),
                start("id"),
                text("9"),
                EndNode,
                start("Branch"),
                EndNode,
            ]
        );
        assert_eq!(report.failures.len(), 2);
        assert!(!report.is_clean());
        assert_eq!(report.attributes, 1);
        assert_eq!(report.nodes, 2);
        assert!(report.failures[0].to_string().contains("getBalance"));
    }

    #[test]
    fn attributes_precede_children() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Person>("name");
        registry.register::<Person>("age");
        let m = Marshaller::new(&registry);

        let events = run(&m, &vec![person("a", 1)]);
        assert_eq!(events, [start("person"), attr("name", "a"), attr("age", "1"), EndNode]);
    }

    #[test]
    fn marshal_is_deterministic() {
        let mut registry = AttributeRegistry::new();
        registry.register::<Address>("city");
        let m = Marshaller::new(&registry);

        let customer = Customer {
            name: "c".into(),
            home: Some(Address { city: "Rome".into() }),
            friends: vec![person("x", 1), person("y", 2)],
        };
        assert_eq!(run(&m, &customer), run(&m, &customer));
    }

    #[test]
    fn depth_guard_closes_open_nodes() {
        let registry = AttributeRegistry::new();
        let config = MarshalConfig::default().with_max_depth(3);
        let m = Marshaller::with_config(&registry, config);

        let mut chain = Chain { next: None };
        for _ in 0..5 {
            chain = Chain {
                next: Some(Box::new(chain)),
            };
        }

        let mut writer = EventWriter::new();
        let err = m.marshal(&chain, &mut writer).unwrap_err();
        assert_eq!(
            err,
            MarshalError::DepthExceeded {
                max_depth: 3,
                node: "next".into(),
            }
        );

        let events = writer.events();
        let starts = events.iter().filter(|e| matches!(e, StartNode(_))).count();
        let ends = events.iter().filter(|e| matches!(e, EndNode)).count();
        assert_eq!(starts, 3);
        assert_eq!(starts, ends);
    }

    #[test]
    fn shallow_graph_within_depth() {
        let registry = AttributeRegistry::new();
        let config = MarshalConfig::default().with_max_depth(2);
        let m = Marshaller::with_config(&registry, config);

        let chain = Chain {
            next: Some(Box::new(Chain { next: None })),
        };

        let mut writer = EventWriter::new();
        let report = m.marshal_with_report(&chain, &mut writer).unwrap();
        assert_eq!(report.max_depth, 2);
        assert!(report.is_clean());
    }

    #[test]
    fn replay_into_another_writer() {
        let registry = AttributeRegistry::new();
        let m = Marshaller::new(&registry);

        let mut first = EventWriter::new();
        m.marshal(&person("r", 5), &mut first).unwrap();

        let mut second = EventWriter::new();
        let sink: &mut dyn HierarchicalWriter = &mut second;
        first.replay(sink);
        assert_eq!(first, second);
    }
}
