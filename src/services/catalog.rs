//! Static treatment-plan and condition-info tables.
//!
//! Keys are matched case-sensitively against the exact labels the inference
//! service emits. The `"No disorder detected"` label is intentionally not a
//! table entry: it shares one canonical fallback record with every unknown
//! key, so the two can never drift apart.

use crate::models::ConditionInfo;
use once_cell::sync::Lazy;
use std::collections::HashMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

static DEFAULT_PLAN: Lazy<Vec<String>> = Lazy::new(|| {
    strings(&[
        "Maintain a balanced routine with regular exercise and time outdoors",
        "Practice mindfulness or meditation for a few minutes each day",
        "Keep a consistent sleep schedule of 7-9 hours",
        "Stay socially connected with friends and family",
        "Consult a mental health professional if you notice persistent changes in mood",
    ])
});

static TREATMENT_PLANS: Lazy<HashMap<&'static str, Vec<String>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Depression",
            strings(&[
                "Schedule a consultation with a licensed therapist for cognitive behavioural therapy",
                "Maintain a consistent sleep schedule of 7-9 hours per night",
                "Engage in at least 30 minutes of physical activity most days",
                "Keep a mood journal to track triggers and patterns",
                "Stay connected with supportive friends and family rather than withdrawing",
            ]),
        ),
        (
            "Anxiety",
            strings(&[
                "Practice slow, deep breathing exercises for 10 minutes daily",
                "Limit caffeine and alcohol, both of which can heighten anxiety",
                "Try progressive muscle relaxation before bed to improve sleep",
                "Challenge anxious thoughts by writing down the evidence for and against them",
                "Consider cognitive behavioural therapy with a qualified professional",
            ]),
        ),
        (
            "ADHD",
            strings(&[
                "Break large tasks into short, clearly-defined steps with deadlines",
                "Use timers, alarms and written lists to externalize reminders",
                "Build regular physical activity into every day to help manage restlessness",
                "Reduce distractions in your workspace (notifications, clutter, noise)",
                "Discuss assessment and treatment options with a specialist clinician",
            ]),
        ),
        (
            "OCD",
            strings(&[
                "Seek exposure and response prevention (ERP) therapy from a trained therapist",
                "Practice delaying compulsions by gradually increasing the wait time",
                "Label intrusive thoughts as thoughts rather than facts or commands",
                "Keep a log of triggers, obsessions and compulsions to review with a clinician",
                "Involve family or close friends so rituals are not reinforced at home",
            ]),
        ),
        (
            "PTSD",
            strings(&[
                "Work with a trauma-informed therapist (e.g. trauma-focused CBT or EMDR)",
                "Use grounding techniques such as the 5-4-3-2-1 method during flashbacks",
                "Keep a predictable daily routine to restore a sense of safety",
                "Avoid self-medicating with alcohol or other substances",
                "Lean on trusted people and consider a peer support group",
            ]),
        ),
        (
            "Aspergers",
            strings(&[
                "Connect with a clinician experienced in autism spectrum support",
                "Use structured routines and advance planning to reduce daily stress",
                "Practice social scenarios in low-pressure settings or support groups",
                "Identify sensory triggers and plan coping strategies for them",
                "Build on personal strengths and special interests in study or work",
            ]),
        ),
    ])
});

static DEFAULT_INFO: Lazy<ConditionInfo> = Lazy::new(|| ConditionInfo {
    description: "No significant signs of a mental health disorder were detected in your \
                  responses. Everyone experiences stress and low moments from time to time; \
                  this result suggests your current symptoms are within a typical range."
        .to_string(),
    causes: strings(&[
        "Everyday stress at work, school or home",
        "Temporary life changes or disruptions to routine",
        "Normal fluctuations in mood and energy",
    ]),
    effects: strings(&[
        "Occasional restlessness or low mood that passes on its own",
        "Short-lived changes in sleep or appetite",
    ]),
    common_emotions: strings(&["Contentment", "Occasional stress", "Calm"]),
});

static CONDITION_INFO: Lazy<HashMap<&'static str, ConditionInfo>> = Lazy::new(|| {
    HashMap::from([
        (
            "Depression",
            ConditionInfo {
                description: "Depression is a mood disorder marked by persistent sadness, loss \
                              of interest in activities once enjoyed, and low energy that lasts \
                              for weeks rather than days. It affects how you feel, think and \
                              handle daily activities."
                    .to_string(),
                causes: strings(&[
                    "Family history and genetic predisposition",
                    "Imbalances in brain chemistry",
                    "Prolonged stress, grief or trauma",
                    "Chronic illness or certain medications",
                ]),
                effects: strings(&[
                    "Persistent low mood and loss of interest",
                    "Fatigue and disrupted sleep or appetite",
                    "Difficulty concentrating and making decisions",
                    "Withdrawal from friends and activities",
                ]),
                common_emotions: strings(&["Sadness", "Hopelessness", "Guilt", "Emptiness"]),
            },
        ),
        (
            "Anxiety",
            ConditionInfo {
                description: "Anxiety disorders involve excessive, persistent worry and fear \
                              that is difficult to control and interferes with daily life. The \
                              worry is often out of proportion to the actual situation and may \
                              come with physical symptoms such as a racing heart or tension."
                    .to_string(),
                causes: strings(&[
                    "Genetics and family history",
                    "Stressful or traumatic life events",
                    "Overactive stress response in the brain",
                    "Excessive caffeine or substance use",
                ]),
                effects: strings(&[
                    "Restlessness and feeling on edge",
                    "Muscle tension, rapid heartbeat and sweating",
                    "Trouble sleeping and concentrating",
                    "Avoidance of situations that trigger worry",
                ]),
                common_emotions: strings(&["Fear", "Worry", "Tension", "Apprehension"]),
            },
        ),
        (
            "ADHD",
            ConditionInfo {
                description: "Attention-deficit/hyperactivity disorder (ADHD) is a \
                              neurodevelopmental condition characterized by patterns of \
                              inattention, hyperactivity and impulsivity that interfere with \
                              functioning at work, school or home."
                    .to_string(),
                causes: strings(&[
                    "Strong genetic component",
                    "Differences in brain development and dopamine regulation",
                    "Premature birth or low birth weight",
                ]),
                effects: strings(&[
                    "Difficulty sustaining attention and finishing tasks",
                    "Forgetfulness and disorganization",
                    "Restlessness and acting without thinking",
                    "Strained performance at school or work",
                ]),
                common_emotions: strings(&[
                    "Frustration",
                    "Restlessness",
                    "Overwhelm",
                    "Impatience",
                ]),
            },
        ),
        (
            "OCD",
            ConditionInfo {
                description: "Obsessive-compulsive disorder (OCD) involves unwanted, intrusive \
                              thoughts (obsessions) that drive repetitive behaviours or mental \
                              rituals (compulsions) performed to relieve the distress the \
                              thoughts create."
                    .to_string(),
                causes: strings(&[
                    "Genetic vulnerability",
                    "Differences in brain circuits involved in habit and fear",
                    "Stressful life events that trigger or worsen symptoms",
                ]),
                effects: strings(&[
                    "Hours lost each day to rituals and checking",
                    "Distress when routines are interrupted",
                    "Avoidance of places or objects that trigger obsessions",
                    "Strained relationships and reduced productivity",
                ]),
                common_emotions: strings(&["Anxiety", "Doubt", "Shame", "Relief-seeking"]),
            },
        ),
        (
            "PTSD",
            ConditionInfo {
                description: "Post-traumatic stress disorder (PTSD) can develop after \
                              experiencing or witnessing a traumatic event. Symptoms include \
                              flashbacks, nightmares, severe anxiety and intrusive memories \
                              that persist long after the event has passed."
                    .to_string(),
                causes: strings(&[
                    "Exposure to a traumatic or life-threatening event",
                    "Repeated exposure to distressing situations",
                    "Lack of support after the trauma",
                ]),
                effects: strings(&[
                    "Flashbacks and nightmares that relive the event",
                    "Hypervigilance and being easily startled",
                    "Avoidance of reminders of the trauma",
                    "Emotional numbness and detachment",
                ]),
                common_emotions: strings(&["Fear", "Anger", "Guilt", "Detachment"]),
            },
        ),
        (
            "Aspergers",
            ConditionInfo {
                description: "Asperger's syndrome, part of the autism spectrum, is \
                              characterized by differences in social communication alongside \
                              focused interests and a strong preference for routine, typically \
                              without delays in language or cognitive development."
                    .to_string(),
                causes: strings(&[
                    "Genetic factors",
                    "Differences in early brain development",
                ]),
                effects: strings(&[
                    "Difficulty reading social cues and unwritten rules",
                    "Deep, focused interests in specific topics",
                    "Discomfort with unexpected changes to routine",
                    "Sensory sensitivities to sound, light or texture",
                ]),
                common_emotions: strings(&[
                    "Social anxiety",
                    "Frustration",
                    "Overstimulation",
                ]),
            },
        ),
    ])
});

/// Look up the treatment plan for a condition, falling back to the canonical
/// default record on any miss.
pub fn treatment_plan(condition: &str) -> &'static [String] {
    TREATMENT_PLANS
        .get(condition)
        .unwrap_or(&DEFAULT_PLAN)
        .as_slice()
}

/// Look up the info record for a condition, falling back to the canonical
/// default record on any miss.
pub fn condition_info(condition: &str) -> &'static ConditionInfo {
    CONDITION_INFO.get(condition).unwrap_or(&DEFAULT_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_have_entries_in_both_tables() {
        for key in ["Depression", "Anxiety", "ADHD", "OCD", "PTSD", "Aspergers"] {
            assert!(TREATMENT_PLANS.contains_key(key), "missing plan for {key}");
            assert!(CONDITION_INFO.contains_key(key), "missing info for {key}");
        }
    }

    #[test]
    fn anxiety_plan_has_five_recommendations() {
        assert_eq!(treatment_plan("Anxiety").len(), 5);
    }

    #[test]
    fn no_disorder_label_and_unknown_keys_share_the_fallback() {
        assert_eq!(
            treatment_plan("No disorder detected"),
            treatment_plan("something else entirely")
        );
        assert_eq!(
            condition_info("No disorder detected").description,
            condition_info("").description
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_ne!(treatment_plan("Depression"), treatment_plan("depression"));
        assert_eq!(treatment_plan("depression"), treatment_plan(""));
    }
}
