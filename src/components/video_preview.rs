use yew::prelude::*;

/// The mocked phone frame with the looping product demo inside it. Pure
/// markup, no state: body, notch, screen, buttons and the glow behind it
/// are all CSS.
#[function_component(VideoPreview)]
pub fn video_preview() -> Html {
    html! {
        <div class="phone-preview">
            <div class="phone-frame">
                <div class="phone-body">
                    <div class="phone-screen">
                        <div class="phone-notch"></div>
                        <div class="phone-video">
                            <video autoplay=true loop=true muted=true playsinline=true
                                poster="https://via.placeholder.com/300x600/1b2326/ffffff?text=Video+Loading">
                                <source src="/demo-video.mp4" type="video/mp4" />
                                <source src="https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4" type="video/mp4" />
                                {"Your browser does not support the video tag."}
                            </video>
                        </div>
                        <div class="phone-home-indicator"></div>
                    </div>
                    <div class="phone-side-button"></div>
                    <div class="phone-volume-button phone-volume-up"></div>
                    <div class="phone-volume-button phone-volume-down"></div>
                </div>
            </div>
            <div class="phone-glow"></div>
            <div class="phone-play-overlay">
                <div class="phone-play-circle">
                    <svg viewBox="0 0 24 24" fill="currentColor">
                        <path d="M8 5v14l11-7z" />
                    </svg>
                </div>
            </div>

            <style>
                {r#"
                .phone-preview {
                    position: relative;
                    width: 320px;
                    margin: 0 auto;
                }

                .phone-frame {
                    position: relative;
                    width: 320px;
                    height: 600px;
                }

                .phone-body {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #1f2937, #111827);
                    border: 8px solid #374151;
                    border-radius: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
                }

                .phone-screen {
                    position: absolute;
                    inset: 0.5rem;
                    background: #000;
                    border-radius: 2.5rem;
                    overflow: hidden;
                }

                .phone-notch {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 8rem;
                    height: 2rem;
                    background: #000;
                    border-radius: 0 0 1.5rem 1.5rem;
                    z-index: 10;
                }

                .phone-video {
                    position: absolute;
                    inset: 0;
                    padding: 2rem 0.5rem 3rem;
                }

                .phone-video video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    border-radius: 1rem;
                }

                .phone-home-indicator {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 8rem;
                    height: 4px;
                    background: #fff;
                    border-radius: 9999px;
                    opacity: 0.6;
                }

                .phone-side-button {
                    position: absolute;
                    top: 5rem;
                    right: -12px;
                    width: 4px;
                    height: 2rem;
                    background: #4b5563;
                    border-radius: 9999px 0 0 9999px;
                }

                .phone-volume-button {
                    position: absolute;
                    left: -12px;
                    width: 4px;
                    height: 1.5rem;
                    background: #4b5563;
                    border-radius: 0 9999px 9999px 0;
                }

                .phone-volume-up { top: 8rem; }
                .phone-volume-down { top: 10rem; }

                .phone-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, rgba(18, 121, 255, 0.2), rgba(255, 250, 0, 0.2));
                    border-radius: 3rem;
                    filter: blur(24px);
                    transform: scale(1.1);
                    z-index: -1;
                }

                .phone-play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                }

                .phone-preview:hover .phone-play-overlay {
                    opacity: 1;
                }

                .phone-play-circle {
                    width: 4rem;
                    height: 4rem;
                    background: rgba(18, 121, 255, 0.8);
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .phone-play-circle svg {
                    width: 2rem;
                    height: 2rem;
                    color: #fff;
                    margin-left: 4px;
                }
                "#}
            </style>
        </div>
    }
}
