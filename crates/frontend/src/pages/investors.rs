use leptos::prelude::*;
use leptos_router::components::A;

const STEPS: &[(&str, &str)] = &[
    (
        "Calendrier",
        "Le calendrier trimestriel des adjudications est publié dans la rubrique Documentation.",
    ),
    (
        "Soumissions",
        "Les soumissions sont déposées par les intermédiaires agréés le jour de l'adjudication avant l'heure limite.",
    ),
    (
        "Allocation",
        "Les offres sont servies par ordre de taux croissant jusqu'au montant retenu par le Trésor.",
    ),
    (
        "Règlement",
        "Le règlement-livraison intervient à la date de valeur indiquée dans l'avis d'adjudication.",
    ),
];

/// Информация для инвесторов (статический текст)
#[component]
pub fn InvestorsPage() -> impl IntoView {
    view! {
        <div class="page" id="investors">
            <div class="page__header">
                <h1 class="page__title">"Espace investisseurs"</h1>
            </div>
            <div class="page__content">
                <p>
                    "Les titres publics sont émis par voie d'adjudication. "
                    "Ils sont accessibles aux investisseurs institutionnels et, par l'intermédiaire "
                    "des établissements agréés, aux particuliers."
                </p>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .map(|(title, text)| view! {
                            <li class="steps__item">
                                <strong>{*title}</strong>
                                <p>{*text}</p>
                            </li>
                        })
                        .collect_view()}
                </ol>
                <p>
                    "Consulter les "
                    <A href="/titres-publics/resultats">"résultats des adjudications"</A>
                    " et les "
                    <A href="/titres-publics/emissions">"émissions en cours"</A>
                    "."
                </p>
            </div>
        </div>
    }
}
