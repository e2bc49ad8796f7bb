//! Team Directory Page
//!
//! Members grouped by department; the lightbox shows a member's bio.

use collection_view::Lightbox;
use leptos::prelude::*;

use crate::api;
use crate::components::{CategoryTabs, LightboxModal, StatusBanner};
use crate::i18n::tr;
use crate::models::TeamMember;
use crate::resource::{use_category_filter, use_collection};

/// Initials shown when a member has no photo
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn avatar(member: &TeamMember) -> AnyView {
    if member.photo.is_empty() {
        view! { <div class="team-initials">{initials(&member.name)}</div> }.into_any()
    } else {
        view! { <img class="team-photo" src=member.photo.clone() alt=member.name.clone() loading="lazy" /> }
            .into_any()
    }
}

fn member_detail(member: TeamMember) -> impl IntoView {
    view! {
        <article class="team-detail">
            {avatar(&member)}
            <h3>{member.name}</h3>
            <p class="team-position">{member.position}</p>
            <p class="team-department">{member.category}</p>
            {member.bio.map(|bio| view! { <p class="team-bio">{bio}</p> })}
        </article>
    }
}

#[component]
pub fn TeamPage() -> impl IntoView {
    let collection = use_collection(|config| async move { api::list_team(&config).await });
    let filter = use_category_filter(collection);
    let lightbox = RwSignal::new(Lightbox::<u32>::new());

    view! {
        <div class="page team-page">
            <h1>{tr("nav.team")}</h1>

            <CategoryTabs categories=collection.categories() active=filter.active />

            <StatusBanner state=collection.state empty=collection.is_empty() />

            <div class="team-grid">
                <For
                    each=move || filter.filtered.get()
                    key=|member| member.id
                    children=move |member| {
                        let id = member.id;
                        view! {
                            <article class="team-card" on:click=move |_| lightbox.update(|state| state.open_id(id))>
                                {avatar(&member)}
                                <h3>{member.name}</h3>
                                <p class="team-position">{member.position}</p>
                            </article>
                        }
                    }
                />
            </div>

            <LightboxModal
                subset=filter.filtered
                items=collection.items()
                state=lightbox
                render=member_detail
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("maria del carmen"), "MD");
        assert_eq!(initials("Sam"), "S");
        assert_eq!(initials("   "), "");
    }
}
