use leptos::prelude::*;

use crate::components::network_background::NetworkBackground;

/// Landing page: the animated network sits behind the hero copy.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<NetworkBackground />
		<main class="page-content" style="position: relative; z-index: 1;">
			<section class="hero">
				<h1>"Qualified leads, on autopilot"</h1>
				<p class="subtitle">"We find, warm up and book the prospects your sales team wants to talk to."</p>
				<a class="cta" href="#book">"Book a call"</a>
			</section>
		</main>
	}
}
