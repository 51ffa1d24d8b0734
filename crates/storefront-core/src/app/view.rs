impl<C, IN> StorefrontApp<C, IN>
where
    C: ProductCatalog,
    IN: InputProvider,
{
    pub fn new(content: C, input: IN, config: StorefrontConfig, app_title: &'static str) -> Self {
        let cards = vec![CardState::default(); content.product_count()];
        let services_revealed_at = vec![None; content.service_count()];
        if content.is_empty() {
            warn!("catalog: no products available");
        }

        Self {
            content,
            input,
            config,
            app_title,
            viewport_width: config.mobile_breakpoint_px.saturating_add(1),
            section: SectionId::Home,
            section_epoch: 0,
            section_entrance: None,
            sidebar_open: false,
            sidebar_hovered: false,
            modal: None,
            cards,
            services_revealed_at,
            hovered_card: None,
            projects_touch: None,
            page_touch: None,
            form: ContactForm::new(),
            effects: VecDeque::new(),
            pending_redraw: true,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        self.process_inputs(now_ms);
        self.run_deadlines(now_ms);

        let rendered = if self.pending_redraw {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        };

        if self.is_animating(now_ms) {
            TickResult::RenderRequested
        } else {
            rendered
        }
    }

    /// Hands queued side effects to `f` in the order they were raised.
    pub fn drain_effects<F>(&mut self, mut f: F)
    where
        F: FnMut(Effect),
    {
        while let Some(effect) = self.effects.pop_front() {
            f(effect);
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let projects: Vec<ProjectCardView<'_>> = (0..self.content.product_count())
            .filter_map(|index| {
                let product = self.content.product_at(index)?;
                let card = self.cards.get(index).copied().unwrap_or_default();
                Some(ProjectCardView {
                    index,
                    id: product.id,
                    name: product.name,
                    category: product.category,
                    cover_image: product.gallery_image(0),
                    live_demo: product.live_demo,
                    hovered: self.hovered_card == Some(index),
                    reveal: self.reveal_of(card.revealed_at_ms, now_ms),
                    image: card.image,
                })
            })
            .collect();

        let services: Vec<ServiceCardView<'_>> = (0..self.content.service_count())
            .filter_map(|index| {
                let service = self.content.service_at(index)?;
                let revealed_at = self.services_revealed_at.get(index).copied().flatten();
                Some(ServiceCardView {
                    index,
                    icon: service.icon,
                    title: service.title,
                    description: service.description,
                    reveal: self.reveal_of(revealed_at, now_ms),
                })
            })
            .collect();

        let modal = self.modal.and_then(|modal| {
            let product = self.content.product_at(modal.product_index)?;
            Some(ModalView {
                product_index: modal.product_index,
                title: product.name,
                category: product.category,
                description: product.description,
                goal: product.goal,
                technologies: product.technologies,
                features: product.features,
                live_demo: product.live_demo,
                image_src: product.gallery_image(modal.shown_index),
                image_index: modal.image_index,
                image_total: product.gallery_len(),
                show_dots: product.images.len() > 1,
                image_hidden: modal.swap_at_ms.is_some(),
                image_animation: modal.fade_in.and_then(|anim| anim.frame(now_ms)),
                image: modal.image,
                entrance: modal.entrance.frame(now_ms),
            })
        });

        let section_entrance = self.section_entrance.map(|spec| StaggeredFrame {
            spec,
            step_ms: self.config.section_stagger_ms,
            now_ms,
        });

        f(Screen {
            title: self.app_title,
            active_section: self.section,
            section_entrance,
            sidebar: SidebarView {
                open: self.sidebar_open,
                expanded: self.sidebar_hovered && !self.is_mobile(),
            },
            body_scroll_locked: self.body_scroll_locked(),
            projects: &projects,
            empty_notice: self.content.is_empty().then_some(EMPTY_CATALOG_NOTICE),
            services: &services,
            modal,
            form: FormView {
                name: self.form.field(FormField::Name),
                email: self.form.field(FormField::Email),
                project_type: self.form.field(FormField::ProjectType),
                message: self.form.field(FormField::Message),
                submitting: self.form.is_submitting(),
            },
        });
    }

    pub fn active_section(&self) -> SectionId {
        self.section
    }

    pub fn section_epoch(&self) -> u32 {
        self.section_epoch
    }

    pub fn modal(&self) -> Option<&ModalState> {
        self.modal.as_ref()
    }

    /// Source of the selected gallery image of the open product.
    pub fn current_image(&self) -> Option<&str> {
        let modal = self.modal.as_ref()?;
        let product = self.content.product_at(modal.product_index)?;
        Some(product.gallery_image(modal.image_index))
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= self.config.mobile_breakpoint_px
    }

    /// The page body must not scroll behind the modal or the slid-in sidebar.
    pub fn body_scroll_locked(&self) -> bool {
        self.modal.is_some() || self.sidebar_open
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    fn reveal_of(&self, revealed_at_ms: Option<u64>, now_ms: u64) -> Reveal {
        let Some(start_ms) = revealed_at_ms else {
            return Reveal::Hidden;
        };

        AnimationSpec::new(AnimationKind::FadeUp, start_ms, self.config.reveal_ms)
            .frame(now_ms)
            .map_or(Reveal::Visible, Reveal::Entering)
    }
}
