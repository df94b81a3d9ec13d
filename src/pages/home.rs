use yew::prelude::*;

use crate::components::animation::{stagger_delay, FadeInWhenVisible, Offset, TextReveal, CARD_STAGGER_MS, ROW_DURATION_MS};
use crate::components::card::CardGrid;
use crate::components::contact_form::ContactForm;
use crate::components::footer::Footer;
use crate::components::icons::{icon_for, Icon};
use crate::content::{CONTACT_DETAILS, SERVICES};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="relative h-screen bg-black">
            <div class="relative z-10 max-w-7xl mx-auto px-6 h-[calc(100vh-5rem)] flex items-center">
                <div class="max-w-3xl">
                    <TextReveal delay_ms={300}>
                        <h1 class="text-5xl md:text-6xl font-bold text-white mb-6">
                            {"Securing Your Financial Future Through Strategic Investment"}
                        </h1>
                    </TextReveal>
                    <TextReveal delay_ms={500}>
                        <p class="text-xl text-gray-300 mb-8">
                            {"We combine decades of experience with innovative strategies to deliver exceptional returns for our clients."}
                        </p>
                    </TextReveal>
                    <TextReveal delay_ms={700}>
                        <button class="press-button bg-blue-600 text-white px-8 py-3 rounded-lg font-medium hover:bg-blue-700 flex items-center space-x-2">
                            <span>{"Schedule a Consultation"}</span>
                            { icon_for(Icon::ArrowRight, "h-5 w-5") }
                        </button>
                    </TextReveal>
                </div>
            </div>
        </header>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="py-20 bg-black">
            <div class="max-w-7xl mx-auto px-6">
                <FadeInWhenVisible>
                    <h2 class="text-3xl font-bold text-center mb-16 text-white">{"Our Services"}</h2>
                </FadeInWhenVisible>
                <CardGrid cards={SERVICES} />
            </div>
        </section>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    html! {
        <section id="contact" class="py-20 bg-black">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-12">
                    <FadeInWhenVisible>
                        <h2 class="text-3xl font-bold mb-6 text-white">{"Get in Touch"}</h2>
                        <p class="text-gray-300 mb-8">
                            {"Let's discuss how we can help you achieve your financial goals. Our team is ready to provide expert guidance tailored to your needs."}
                        </p>
                        <div class="space-y-4">
                            { for CONTACT_DETAILS.iter().enumerate().map(|(index, detail)| html! {
                                <FadeInWhenVisible
                                    key={detail.text}
                                    offset={Offset::X(-20)}
                                    delay_ms={stagger_delay(index, CARD_STAGGER_MS)}
                                    duration_ms={ROW_DURATION_MS}
                                    class="flex items-center space-x-4"
                                >
                                    { icon_for(detail.icon, "h-5 w-5 text-blue-500") }
                                    <span class="text-gray-300">{ detail.text }</span>
                                </FadeInWhenVisible>
                            }) }
                        </div>
                    </FadeInWhenVisible>
                    <FadeInWhenVisible delay_ms={300}>
                        <ContactForm />
                    </FadeInWhenVisible>
                </div>
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Services />
            <Contact />
            <Footer />
        </>
    }
}
