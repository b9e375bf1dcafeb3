//! Classifier kinds and their layout traits.
//!
//! A classifier is any modeled entity displayed as a box or icon on a
//! diagram: classes, blocks, actors, pseudostates and so on. For layout
//! purposes the kinds fall into two families:
//!
//! - **Resizable contour** kinds draw a contour rectangle that stretches
//!   to hold a label and nested children.
//! - **Fixed-size symbol** kinds draw a small fixed glyph (a stick
//!   figure, a fork bar, an hourglass). Their symbol never resizes, which
//!   exempts them from the containment guarantees the composer gives for
//!   contour kinds.

/// The kind of a modeled classifier, as displayed on a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassifierKind {
    // resizable contour kinds
    Block,
    ConstraintBlock,
    Subsystem,
    Component,
    Part,
    Interface,
    Class,
    Object,
    Artifact,
    Node,
    Package,
    UseCase,
    Activity,
    State,
    Requirement,
    Comment,
    Boundary,
    DiagramReference,
    Stereotype,
    // fixed-size symbol kinds
    Actor,
    InitialNode,
    FinalNode,
    ShallowHistory,
    DeepHistory,
    ForkNode,
    JoinNode,
    DecisionNode,
    TimeEvent,
    AcceptEvent,
    SendSignal,
    InteractionUse,
}

impl ClassifierKind {
    /// Every classifier kind, for table-driven iteration
    pub const ALL: [ClassifierKind; 31] = [
        ClassifierKind::Block,
        ClassifierKind::ConstraintBlock,
        ClassifierKind::Subsystem,
        ClassifierKind::Component,
        ClassifierKind::Part,
        ClassifierKind::Interface,
        ClassifierKind::Class,
        ClassifierKind::Object,
        ClassifierKind::Artifact,
        ClassifierKind::Node,
        ClassifierKind::Package,
        ClassifierKind::UseCase,
        ClassifierKind::Activity,
        ClassifierKind::State,
        ClassifierKind::Requirement,
        ClassifierKind::Comment,
        ClassifierKind::Boundary,
        ClassifierKind::DiagramReference,
        ClassifierKind::Stereotype,
        ClassifierKind::Actor,
        ClassifierKind::InitialNode,
        ClassifierKind::FinalNode,
        ClassifierKind::ShallowHistory,
        ClassifierKind::DeepHistory,
        ClassifierKind::ForkNode,
        ClassifierKind::JoinNode,
        ClassifierKind::DecisionNode,
        ClassifierKind::TimeEvent,
        ClassifierKind::AcceptEvent,
        ClassifierKind::SendSignal,
        ClassifierKind::InteractionUse,
    ];

    /// Returns the display name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ClassifierKind::Block => "Block",
            ClassifierKind::ConstraintBlock => "Constraint Block",
            ClassifierKind::Subsystem => "Subsystem",
            ClassifierKind::Component => "Component",
            ClassifierKind::Part => "Part",
            ClassifierKind::Interface => "Interface",
            ClassifierKind::Class => "Class",
            ClassifierKind::Object => "Object",
            ClassifierKind::Artifact => "Artifact",
            ClassifierKind::Node => "Node",
            ClassifierKind::Package => "Package",
            ClassifierKind::UseCase => "Use Case",
            ClassifierKind::Activity => "Activity",
            ClassifierKind::State => "State",
            ClassifierKind::Requirement => "Requirement",
            ClassifierKind::Comment => "Comment",
            ClassifierKind::Boundary => "Boundary",
            ClassifierKind::DiagramReference => "Diagram Reference",
            ClassifierKind::Stereotype => "Stereotype",
            ClassifierKind::Actor => "Actor",
            ClassifierKind::InitialNode => "Initial Node",
            ClassifierKind::FinalNode => "Final Node",
            ClassifierKind::ShallowHistory => "Shallow History",
            ClassifierKind::DeepHistory => "Deep History",
            ClassifierKind::ForkNode => "Fork",
            ClassifierKind::JoinNode => "Join",
            ClassifierKind::DecisionNode => "Decision",
            ClassifierKind::TimeEvent => "Time Event",
            ClassifierKind::AcceptEvent => "Accept Event",
            ClassifierKind::SendSignal => "Send Signal",
            ClassifierKind::InteractionUse => "Interaction Use",
        }
    }

    /// Returns true when the kind draws a resizable contour rectangle.
    ///
    /// Fixed-size symbol kinds return false; their glyph keeps its size
    /// no matter what the layout asks for.
    pub fn has_resizable_contour(self) -> bool {
        !matches!(
            self,
            ClassifierKind::Actor
                | ClassifierKind::InitialNode
                | ClassifierKind::FinalNode
                | ClassifierKind::ShallowHistory
                | ClassifierKind::DeepHistory
                | ClassifierKind::ForkNode
                | ClassifierKind::JoinNode
                | ClassifierKind::DecisionNode
                | ClassifierKind::TimeEvent
                | ClassifierKind::AcceptEvent
                | ClassifierKind::SendSignal
                | ClassifierKind::InteractionUse
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_covers_every_kind_once() {
        let unique: HashSet<_> = ClassifierKind::ALL.iter().collect();
        assert_eq!(unique.len(), ClassifierKind::ALL.len());
    }

    #[test]
    fn test_names_are_non_empty_and_unique() {
        let names: HashSet<_> = ClassifierKind::ALL.iter().map(|kind| kind.name()).collect();
        assert_eq!(names.len(), ClassifierKind::ALL.len());
        assert!(names.iter().all(|name| !name.is_empty()));
    }

    #[test]
    fn test_contour_partition() {
        assert!(ClassifierKind::Class.has_resizable_contour());
        assert!(ClassifierKind::Package.has_resizable_contour());
        assert!(!ClassifierKind::Actor.has_resizable_contour());
        assert!(!ClassifierKind::ForkNode.has_resizable_contour());

        let fixed = ClassifierKind::ALL
            .iter()
            .filter(|kind| !kind.has_resizable_contour())
            .count();
        assert_eq!(fixed, 12);
    }
}
