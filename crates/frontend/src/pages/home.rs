use leptos::prelude::*;
use leptos_router::components::A;

struct HomeSection {
    href: &'static str,
    title: &'static str,
    summary: &'static str,
}

const SECTIONS: &[HomeSection] = &[
    HomeSection {
        href: "/investisseurs",
        title: "Espace investisseurs",
        summary: "Comment participer aux adjudications de titres publics.",
    },
    HomeSection {
        href: "/titres-publics/documentation",
        title: "Documentation",
        summary: "Notes d'information, calendriers et textes réglementaires.",
    },
    HomeSection {
        href: "/titres-publics/emissions",
        title: "Émissions",
        summary: "Titres en circulation : montants, échéances et taux.",
    },
    HomeSection {
        href: "/titres-publics/resultats",
        title: "Résultats des adjudications",
        summary: "Montants demandés et servis, taux moyens pondérés.",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page" id="home">
            <div class="page__header">
                <h1 class="page__title">"Direction du Trésor"</h1>
            </div>
            <div class="page__content">
                <p class="home__lead">
                    "Portail d'information sur la gestion de la dette publique et le marché des titres publics."
                </p>
                <div class="card-grid">
                    {SECTIONS
                        .iter()
                        .map(|section| view! {
                            <A href=section.href attr:class="card card--link">
                                <h2 class="card__title">{section.title}</h2>
                                <p class="card__text">{section.summary}</p>
                            </A>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
