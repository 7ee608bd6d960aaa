use std::rc::Rc;

use log::info;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::faq::{ChatAction, ChatState, FaqTable};

#[derive(Properties, PartialEq)]
pub struct ChatWidgetProps {
    pub title: String,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &ChatWidgetProps) -> Html {
    let table = use_context::<Rc<FaqTable>>();
    let state = use_reducer(move || ChatState::new(table.unwrap_or_default()));

    let toggle = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Chat widget {}", if state.open { "closed" } else { "opened" });
            state.dispatch(ChatAction::Toggle);
        })
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            state.dispatch(ChatAction::Select(select.value()));
        })
    };

    let on_send = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(ChatAction::Send))
    };

    html! {
        <div class="chat-widget">
            <button class="chat-widget-toggle" onclick={toggle}>
                { "💬" }
            </button>
            if state.open {
                <div class="chat-panel">
                    <div class="chat-panel-header">
                        <h3>{ &props.title }</h3>
                    </div>
                    <div class="chat-transcript">
                        { for state.transcript.iter().enumerate().map(|(i, exchange)| html! {
                            <div key={i}>
                                <div class="chat-bubble user">
                                    <strong>{"You:"}</strong>{" "}{ &exchange.user_text }
                                </div>
                                <div class="chat-bubble bot">
                                    <strong>{"Bot:"}</strong>{" "}{ &exchange.bot_text }
                                </div>
                            </div>
                        }) }
                    </div>
                    <div class="chat-controls">
                        <select onchange={on_select}>
                            <option value="" selected={state.selection.is_empty()}>
                                {"Select a question"}
                            </option>
                            { for state.table.questions().map(|question| html! {
                                <option value={question.to_string()} selected={state.selection == question}>
                                    { question }
                                </option>
                            }) }
                        </select>
                        <button class="chat-send" onclick={on_send}>{"Send"}</button>
                    </div>
                </div>
            }
            <style>
                {r#"
                .chat-widget {
                    position: fixed;
                    bottom: 1rem;
                    right: 1rem;
                    z-index: 20;
                    display: flex;
                    flex-direction: column;
                    align-items: flex-end;
                }
                .chat-widget-toggle {
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    border-radius: 50%;
                    width: 56px;
                    height: 56px;
                    font-size: 24px;
                    cursor: pointer;
                    box-shadow: 0 8px 16px rgba(0, 0, 0, 0.25);
                    transition: transform 0.2s ease;
                }
                .chat-widget-toggle:hover {
                    transform: scale(1.1);
                }
                .chat-panel {
                    order: -1;
                    margin-bottom: 0.5rem;
                    width: 20rem;
                    height: 24rem;
                    background: #fff;
                    border-radius: 12px;
                    box-shadow: 0 16px 32px rgba(0, 0, 0, 0.3);
                    display: flex;
                    flex-direction: column;
                    animation: chatIn 0.3s ease-out;
                }
                .dark .chat-panel {
                    background: #1f2937;
                }
                @keyframes chatIn {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                .chat-panel-header {
                    background: #2563eb;
                    color: #fff;
                    padding: 1rem;
                    border-radius: 12px 12px 0 0;
                }
                .chat-transcript {
                    flex: 1;
                    padding: 1rem;
                    overflow-y: auto;
                }
                .chat-bubble {
                    padding: 0.5rem;
                    border-radius: 8px;
                    margin-bottom: 0.5rem;
                }
                .chat-bubble.user { background: #e5e7eb; }
                .chat-bubble.bot { background: #dbeafe; }
                .dark .chat-bubble.user { background: #374151; }
                .dark .chat-bubble.bot { background: #1e3a8a; }
                .chat-controls {
                    padding: 1rem;
                    border-top: 1px solid rgba(0, 0, 0, 0.1);
                }
                .chat-controls select {
                    width: 100%;
                    padding: 0.5rem;
                    border-radius: 8px;
                    margin-bottom: 0.5rem;
                }
                .chat-send {
                    width: 100%;
                    background: #2563eb;
                    color: #fff;
                    border: none;
                    padding: 0.5rem;
                    border-radius: 8px;
                    cursor: pointer;
                }
                .chat-send:hover { background: #1d4ed8; }
                "#}
            </style>
        </div>
    }
}
