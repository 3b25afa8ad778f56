use std::rc::Rc;

use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::components::fade_in::{FadeIn, FadeKind};
use crate::components::glow_card::GlowCard;
use crate::config::SiteConfig;
use crate::counter::{CounterAnimator, StatNode};
use crate::reveal::ViewportTrigger;

pub struct Stat {
    pub target: &'static str,
    pub unit: Option<&'static str>,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat {
        target: "500",
        unit: None,
        label: "Accounts Recovered",
    },
    Stat {
        target: "100",
        unit: None,
        label: "Confidential",
    },
    Stat {
        target: "24",
        unit: Some("+"),
        label: "Hour Turnaround",
    },
    Stat {
        target: "50",
        unit: None,
        label: "Countries Served",
    },
];

/// The "why" section. Its counters start once, the first time half of the
/// section is on screen.
#[function_component(StatsSection)]
pub fn stats_section() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let section_ref = use_node_ref();
    let stat_refs = use_memo(|_| STATS.iter().map(|_| NodeRef::default()).collect::<Vec<_>>(), ());

    {
        let section_ref = section_ref.clone();
        let stat_refs = stat_refs.clone();
        use_effect_with_deps(
            move |stats_config| {
                let animator = CounterAnimator::new(stats_config);
                let trigger = ViewportTrigger::observe(
                    section_ref.cast::<Element>().as_ref(),
                    &stats_config.reveal_options(),
                    move || {
                        let stats: Vec<StatNode> = stat_refs
                            .iter()
                            .cloned()
                            .filter_map(StatNode::from_ref)
                            .collect();
                        let started = animator.animate(&stats);
                        info!("Stats revealed, animating {} counters", started);
                    },
                );
                move || drop(trigger)
            },
            config.stats.clone(),
        );
    }

    html! {
        <section id="why" class="why-section" ref={section_ref}>
            <div class="container">
                <FadeIn kind={FadeKind::Title}>{"Why SocialUnlock"}</FadeIn>
                <div class="stats-grid">
                    { for STATS.iter().zip(stat_refs.iter()).map(|(stat, node)| html! {
                        <GlowCard class="stat-card">
                            <span
                                class="stat-number"
                                ref={node.clone()}
                                data-target={stat.target}
                                data-unit={stat.unit}
                            >
                                {"0"}
                            </span>
                            <span class="stat-label">{stat.label}</span>
                        </GlowCard>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::{StatTarget, Suffix};

    #[test]
    fn declared_stats_parse() {
        for stat in STATS {
            assert!(StatTarget::parse(Some(stat.target), stat.unit).is_ok(), "{}", stat.label);
        }
    }

    #[test]
    fn only_the_hundred_stat_is_a_percentage() {
        let percents: Vec<_> = STATS
            .iter()
            .filter(|s| StatTarget::parse(Some(s.target), s.unit).unwrap().suffix == Suffix::Percent)
            .map(|s| s.target)
            .collect();
        assert_eq!(percents, vec!["100"]);
    }
}
