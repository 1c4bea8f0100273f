//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{analysis_detail::AnalysisDetailPage, analysis_list::AnalysisListPage, practice::PracticePage};
use crate::state::practice::PracticeState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared practice-progress context and sets up client-side
/// routing. Route-local state (the record list) lives in its page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let practice = RwSignal::new(PracticeState::default());
    provide_context(practice);

    view! {
        <Stylesheet id="leptos" href="/pkg/voicelab.css"/>
        <Title text="음성 분석"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=StaticSegment("") view=AnalysisListPage/>
                <Route path=StaticSegment("analysis") view=AnalysisListPage/>
                <Route path=(StaticSegment("analysis"), ParamSegment("id")) view=AnalysisDetailPage/>
                <Route path=StaticSegment("practice") view=PracticePage/>
            </Routes>
        </Router>
    }
}
