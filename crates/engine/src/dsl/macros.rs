/// Declares a unit struct implementing [`Rule`](crate::dsl::rule::Rule).
///
/// ```ignore
/// rule! {
///     OneNotrumpResponse: "1NT Response",
///     tag: Natural(Notrump),
///     auction: [PartnerOpened, BidderHasNotActed],
///     call: [IsCall(1, Strain::NoTrump)],
///     shows: [ShowHcpRange(6, 10)]
/// }
/// ```
#[macro_export]
macro_rules! rule {
    (
        $struct_name:ident: $name_str:literal,
        tag: $tag_kind:ident ( $tag_arg:ident ),
        $(requires: $requires:ident,)?
        auction: [ $( $a_pred:expr ),* $(,)? ],
        call: [ $( $c_pred:expr ),* $(,)? ],
        shows: [ $( $shows_pred:expr ),* $(,)? ]
        $(, annotations: [ $( $ann:ident ),* $(,)? ] )?
        $(, planner: $planner_expr:expr )?
        $(, chooser: $chooser:ident )?
        $(,)?
    ) => {
        #[derive(Debug)]
        pub struct $struct_name;

        impl $crate::dsl::rule::Rule for $struct_name {
            fn name(&self, _call: &types::Call) -> String {
                $name_str.to_string()
            }

            fn tag(&self) -> $crate::bid::BidTag {
                $crate::__rule_tag!($tag_kind($tag_arg))
            }

            fn requires(&self) -> Option<$crate::conventions::ConventionId> {
                $crate::__rule_requires!($($requires)?)
            }

            fn auction_criteria(&self) -> Vec<Box<dyn $crate::dsl::auction_predicates::AuctionPredicate>> {
                vec![ $( Box::new($a_pred) ),* ]
            }

            fn call_predicates(&self) -> Vec<Box<dyn $crate::dsl::call_predicates::CallPredicate>> {
                vec![ $( Box::new($c_pred) ),* ]
            }

            fn shows(&self) -> Vec<Box<dyn $crate::dsl::shows::Shows>> {
                vec![ $( Box::new($shows_pred) ),* ]
            }

            fn annotations(&self) -> Vec<$crate::dsl::annotations::Annotation> {
                vec![ $( $( $crate::dsl::annotations::Annotation::$ann ),* )? ]
            }

            fn planner(&self) -> Option<std::sync::Arc<dyn $crate::dsl::planner::Planner>> {
                $crate::__rule_planner!($($planner_expr)?)
            }

            fn chooser(&self) -> $crate::kernel::Chooser {
                $crate::__rule_chooser!($($chooser)?)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_tag {
    (Natural($kind:ident)) => {
        $crate::bid::BidTag::Natural($crate::bid::NaturalKind::$kind)
    };
    (Ask($id:ident)) => {
        $crate::__rule_tag!(@convention $id, Ask)
    };
    (Reply($id:ident)) => {
        $crate::__rule_tag!(@convention $id, Reply)
    };
    (Continuation($id:ident)) => {
        $crate::__rule_tag!(@convention $id, Continuation)
    };
    (@convention $id:ident, $role:ident) => {
        $crate::bid::BidTag::Convention {
            id: $crate::conventions::ConventionId::$id,
            role: $crate::bid::ConventionRole::$role,
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_requires {
    () => {
        None
    };
    ($id:ident) => {
        Some($crate::conventions::ConventionId::$id)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_planner {
    () => {
        None
    };
    ($planner:expr) => {
        Some(std::sync::Arc::new($planner) as std::sync::Arc<dyn $crate::dsl::planner::Planner>)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __rule_chooser {
    () => {
        $crate::kernel::Chooser::Cheapest
    };
    ($chooser:ident) => {
        $crate::kernel::Chooser::$chooser
    };
}
