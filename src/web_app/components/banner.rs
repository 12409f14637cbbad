// web_app/components/banner.rs - Home page promotional slideshow
//
// A horizontal strip of slides translated by the carousel index, with
// previous/next buttons, one dot per slide and a 5 second autoplay.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use leptos::wasm_bindgen::JsValue;

use crate::web_app::behavior::carousel::{Carousel, AUTOPLAY_PERIOD};
use crate::web_app::model::{BANNER_SLIDES, BANNER_SLIDE_COUNT, PRODUCTS_PATH};

/// Repeating browser interval, cleared when dropped
pub struct Autoplay {
    handle: IntervalHandle,
}

impl Autoplay {
    pub fn start(tick: impl Fn() + 'static, period: Duration) -> Result<Self, JsValue> {
        let handle = set_interval_with_handle(tick, period)?;
        Ok(Self { handle })
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.handle.clear();
    }
}

#[component]
pub fn Banner() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(BANNER_SLIDE_COUNT));

    // Effects only run in the browser; the interval lives as long as the banner.
    Effect::new(move || {
        match Autoplay::start(move || carousel.update(Carousel::advance), AUTOPLAY_PERIOD) {
            Ok(autoplay) => on_cleanup(move || drop(autoplay)),
            Err(err) => tracing::warn!("Banner autoplay unavailable: {:?}", err),
        }
    });

    let slides = BANNER_SLIDES
        .into_iter()
        .enumerate()
        .map(|(index, slide)| {
            let alt = format!("Banner {}", index + 1);
            view! {
                <div class="min-w-full relative h-full">
                    <img
                        src=slide.desktop_image
                        alt=alt.clone()
                        class="hidden md:block w-full h-full object-cover"
                    />
                    <img
                        src=slide.mobile_image
                        alt=alt
                        class="md:hidden w-full h-full object-cover"
                    />

                    <div class="absolute inset-0 flex flex-col items-center md:items-start justify-end md:justify-center pb-16 md:pb-0 px-4 md:px-12 lg:px-20">
                        <h1 class="text-2xl md:text-3xl lg:text-4xl xl:text-5xl font-bold text-center md:text-left max-w-xs md:max-w-lg lg:max-w-xl leading-tight text-white drop-shadow-lg">
                            {slide.title}
                        </h1>
                        <div class="flex items-center mt-4 md:mt-6 font-medium gap-3 md:gap-6">
                            <a
                                href=PRODUCTS_PATH
                                class="flex items-center gap-2 px-6 rounded text-white py-3 bg-red-700 hover:bg-red-700/90 transition"
                            >
                                {slide.primary_label}
                                <span aria-hidden="true">"→"</span>
                            </a>
                            <a
                                href=PRODUCTS_PATH
                                class="hidden md:flex items-center gap-2 px-6 rounded text-white py-3 bg-red-700 hover:bg-red-700/90 transition"
                            >
                                {slide.secondary_label}
                                <span aria-hidden="true">"→"</span>
                            </a>
                        </div>
                    </div>
                </div>
            }
        })
        .collect_view();

    let dots = (0..BANNER_SLIDE_COUNT.get())
        .map(|index| {
            view! {
                <button
                    class=move || {
                        if carousel.with(|c| c.is_active(index)) {
                            "h-3 w-8 rounded-full bg-red-500 transition-all"
                        } else {
                            "h-3 w-3 rounded-full bg-white/60 hover:bg-white/80 transition-all"
                        }
                    }
                    aria-label=format!("Go to slide {}", index + 1)
                    on:click=move |_| carousel.update(|c| c.go_to(index))
                ></button>
            }
        })
        .collect_view();

    view! {
        <div class="relative overflow-hidden w-full">
            // 2366 x 848 artwork
            <div class="relative w-full" style="padding-bottom: 35.84%">
                <div
                    class="absolute inset-0 flex transition-transform duration-500 ease-out"
                    style:transform=move || carousel.with(Carousel::transform)
                >
                    {slides}
                </div>

                <button
                    class="absolute left-4 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white p-2 md:p-3 rounded-full shadow-lg transition z-10"
                    aria-label="Previous slide"
                    on:click=move |_| carousel.update(Carousel::previous)
                >
                    "‹"
                </button>

                <button
                    class="absolute right-4 top-1/2 -translate-y-1/2 bg-white/80 hover:bg-white p-2 md:p-3 rounded-full shadow-lg transition z-10"
                    aria-label="Next slide"
                    on:click=move |_| carousel.update(Carousel::next)
                >
                    "›"
                </button>

                <div class="absolute bottom-4 md:bottom-6 left-1/2 -translate-x-1/2 flex gap-2 z-10">
                    {dots}
                </div>
            </div>
        </div>
    }
}
