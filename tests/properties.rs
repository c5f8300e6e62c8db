//! Property-based tests for the renderers.

use proptest::prelude::*;

use folio::page::{
    EmailState, Page, PageState, RenderOptions, SectionId, escape_html, render_html,
};
use folio::profile::{Profile, builtin};

fn arb_skills() -> impl Strategy<Value = Vec<(String, Vec<String>)>> {
    prop::collection::vec(
        ("[A-Z][a-z]{2,10}", prop::collection::vec("[A-Za-z+#]{1,8}", 1..5)),
        1..5,
    )
}

fn profile_with_skills(skills: &[(String, Vec<String>)]) -> Profile {
    let mut profile = builtin().clone();
    profile.skills = skills.iter().cloned().collect();
    profile
}

proptest! {
    #[test]
    fn escaped_text_has_no_markup(input in ".{0,200}") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn escaping_preserves_plain_text(input in "[A-Za-z0-9 .,]{0,100}") {
        prop_assert_eq!(escape_html(&input), input);
    }

    #[test]
    fn skill_order_is_preserved(skills in arb_skills()) {
        let profile = profile_with_skills(&skills);
        let html = render_html(&Page::build(&profile, PageState::new()), &RenderOptions::default());

        // A repeated category keeps its first position and takes the last items.
        let mut expected: Vec<(String, Vec<String>)> = Vec::new();
        for (category, items) in &skills {
            match expected.iter_mut().find(|(seen, _)| seen == category) {
                Some(entry) => entry.1.clone_from(items),
                None => expected.push((category.clone(), items.clone())),
            }
        }

        let mut cursor = 0;
        for (category, items) in &expected {
            let heading = format!("<h3 class=\"skill-category-title\">{category}</h3>");
            let start = cursor + html[cursor..].find(&heading).unwrap();
            let end = start + html[start..].find("</ul>").unwrap();
            let rendered: Vec<&str> = html[start..end]
                .lines()
                .filter_map(|line| line.strip_prefix("<li>")?.strip_suffix("</li>"))
                .collect();
            prop_assert_eq!(&rendered, items);
            cursor = end;
        }
    }

    #[test]
    fn every_section_renders_once(reveal in any::<bool>(), base in "(/[a-z]{1,8}){0,2}/?") {
        let mut state = PageState::new();
        if reveal {
            state.email = EmailState::Revealed;
        }
        let options = RenderOptions { base_path: base, ..RenderOptions::default() };
        let html = render_html(&Page::build(builtin(), state), &options);
        for id in SectionId::ALL {
            let anchor = format!("id=\"{}\"", id.anchor());
            prop_assert_eq!(html.matches(&anchor).count(), 1);
        }
    }
}
