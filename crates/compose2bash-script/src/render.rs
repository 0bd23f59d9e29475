//! RenderingContext から起動スクリプト本文への描画

use crate::error::Result;
use compose2bash_core::RenderingContext;
use tera::{Context, Tera};

/// スクリプト内で呼び出すDocker CLI
pub const DOCKER_BIN: &str = "/usr/bin/docker";

const TEMPLATE_NAME: &str = "launch.sh";

/// 起動スクリプトのテンプレート
///
/// pull → 同名コンテナの削除 → run の順に実行する。
/// `docker` には接続先フラグ込みのコマンドが入る。
const SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
{{ docker }} pull {{ service.image }}

if {{ docker }} ps | grep --quiet {{ container_name }} ; then
    {{ docker }} rm -f {{ container_name }}
fi

{{ docker }} run \
{% if service.privileged %}  --privileged=true \
{% endif %}  --restart=always \
  -d \
  --name {{ container_name }} \
{% for volume in service.volumes %}  -v {{ volume }} \
{% endfor %}{% for link in service.links %}  --link {{ link }} \
{% endfor %}{% for key, value in service.environment %}  -e {{ key }}="{{ value }}" \
{% endfor %}{% for port in service.ports %}  -p {{ port }} \
{% endfor %}  {{ service.image }}{% if service.command %} {{ service.command }}{% endif %}
"#;

/// 接続先フラグ込みのDockerコマンド
pub fn docker_command(docker_host_arg: &str) -> String {
    if docker_host_arg.is_empty() {
        DOCKER_BIN.to_string()
    } else {
        format!("{} {}", DOCKER_BIN, docker_host_arg)
    }
}

/// スクリプトレンダラー
///
/// テンプレートのパースは生成時に一度だけ行う。
pub struct ScriptRenderer {
    tera: Tera,
}

impl ScriptRenderer {
    /// 新しいレンダラーを作成
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // シェルスクリプトなのでHTMLエスケープはしない
        tera.autoescape_on(vec![]);
        tera.add_raw_template(TEMPLATE_NAME, SCRIPT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// コンテキストを描画してスクリプト本文を返す
    pub fn render(&self, ctx: &RenderingContext) -> Result<String> {
        let mut context = Context::from_serialize(ctx)?;
        context.insert("docker", &docker_command(&ctx.docker_host_arg));

        let mut script = self.tera.render(TEMPLATE_NAME, &context)?;
        if !script.ends_with('\n') {
            script.push('\n');
        }
        Ok(script)
    }
}

/// コンテキストを描画してスクリプト本文を返す
pub fn render_script(ctx: &RenderingContext) -> Result<String> {
    ScriptRenderer::new()?.render(ctx)
}
