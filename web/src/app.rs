use crate::scheduler::GlooScheduler;
use crate::surface::{DomSurface, TileView};
use crate::utils::js_random_seed;
use recollect_core as game;
use game::{MessageCatalog, MessageId};
use web_sys::HtmlInputElement;
use yew::prelude::*;

type Game = game::MemoryGame<DomSurface, GlooScheduler, game::English>;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Submit,
    Timer(game::TimerEvent),
    TileClicked(game::TileIndex),
}

fn tile_style(color: game::Hsl, position: Option<game::Position>) -> String {
    match position {
        Some(pos) => format!(
            "background: {}; left: {}px; top: {}px;",
            color, pos.left, pos.top
        ),
        None => format!("background: {};", color),
    }
}

fn tile_class(view: &TileView) -> Classes {
    classes!(
        "tile-btn",
        if view.clickable { "clickable" } else { "disabled" },
        view.label.is_some().then_some("revealed"),
        view.position.is_some().then_some("tile-abs")
    )
}

#[derive(Properties, Clone, PartialEq)]
struct TileProps {
    view: TileView,
    callback: Callback<game::TileIndex>,
}

#[function_component(TileButton)]
fn tile_component(props: &TileProps) -> Html {
    let TileProps { view, callback } = props.clone();
    let index = view.index;
    let class = tile_class(&view);
    let style = tile_style(view.color, view.position);
    let label = view.label.map(|number| number.to_string()).unwrap_or_default();

    let onclick = view.clickable.then(|| {
        Callback::from(move |_: MouseEvent| {
            log::trace!("tile {} clicked", index);
            callback.emit(index);
        })
    });

    html! {
        <button type="button" ref={view.node} {class} {style} {onclick}>{label}</button>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct StatusProps {
    status: Option<game::Status>,
}

#[function_component(StatusLine)]
fn status_component(props: &StatusProps) -> Html {
    match &props.status {
        Some(status) => html! {
            <p id="status" class={status.class_name()}>{&status.text}</p>
        },
        None => html! { <p id="status" class="status"/> },
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct MemoryProps {
    pub config: game::GameConfig,
    /// Force a seed instead of random
    pub seed: Option<u64>,
    /// Count shown in the input on load
    pub prefill: u8,
}

pub(crate) struct MemoryView {
    game: Game,
    input: NodeRef,
}

impl MemoryView {
    fn read_input(&self) -> String {
        self.input
            .cast::<HtmlInputElement>()
            .map(|input| input.value())
            .unwrap_or_default()
    }
}

impl Component for MemoryView {
    type Message = Msg;
    type Properties = MemoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let seed = props.seed.unwrap_or_else(js_random_seed);
        log::debug!("seed: {}", seed);

        let scheduler = GlooScheduler::new(ctx.link().callback(Msg::Timer));
        let mut game = Game::new(
            props.config,
            game::English,
            DomSurface::default(),
            scheduler,
            seed,
        );
        game.prime();

        Self {
            game,
            input: NodeRef::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Submit => {
                // Enter in the input acts like the button, so it is ignored while the button is
                // disabled
                if !self.game.surface().submit_enabled() {
                    log::debug!("submit while disabled");
                    return false;
                }
                let raw = self.read_input();
                match self.game.submit(&raw) {
                    Ok(count) => log::debug!("new round with {} tiles", count),
                    Err(err) => log::debug!("invalid count: {}", err),
                }
                true
            }
            Timer(event) => {
                log::trace!("timer: {:?}", event);
                self.game.on_timer(event);
                true
            }
            TileClicked(index) => {
                let outcome = self.game.click(index);
                log::debug!("click {} -> {:?}", index, outcome);
                outcome.has_update()
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            if let Some(input) = self.input.cast::<HtmlInputElement>() {
                input.set_value(&ctx.props().prefill.to_string());
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let catalog = self.game.catalog();
        let config = self.game.config();
        let surface = self.game.surface();

        let onclick = ctx.link().callback(|_: MouseEvent| Msg::Submit);
        let onkeydown = ctx
            .link()
            .batch_callback(|e: KeyboardEvent| (e.key() == "Enter").then_some(Msg::Submit));
        let tile_callback = ctx.link().callback(Msg::TileClicked);
        let layout_class = match surface.layout() {
            game::LayoutMode::Flow => "row-layout",
            game::LayoutMode::Free => "absolute-layout",
        };

        html! {
            <div class="recollect">
                <div class="controls">
                    <label id="btnCountLabel" for="btnCount">{catalog.text(MessageId::CountLabel)}</label>
                    <input
                        id="btnCount"
                        type="number"
                        min={config.min_count.to_string()}
                        max={config.max_count.to_string()}
                        ref={self.input.clone()}
                        {onkeydown}
                    />
                    <button id="goBtn" type="button" disabled={!surface.submit_enabled()} {onclick}>
                        {catalog.text(MessageId::GoButton)}
                    </button>
                </div>
                <StatusLine status={surface.status().cloned()}/>
                <div id="playArea" ref={surface.container_ref()} class={classes!("play-area", layout_class)}>
                    {
                        for surface.tiles().iter().map(|view| html! {
                            <TileButton
                                key={view.index}
                                view={view.clone()}
                                callback={tile_callback.clone()}
                            />
                        })
                    }
                </div>
            </div>
        }
    }
}
