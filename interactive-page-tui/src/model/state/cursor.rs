//! 内容面板中的光标位置
//!
//! 光标只表示“键盘指向哪一项”，与核心库中的激活/展开状态无关：
//! 移动光标不会点击任何东西，按 Enter 才会。

use interactive_page_core::validation::RegistrationForm;

/// 注册表单中可被光标选中的行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRow {
    /// 第 n 个文本输入框
    Field(usize),
    /// 条款复选框
    Terms,
    /// 提交按钮
    Submit,
}

/// 根据表单中实际存在的元素生成行列表
pub fn form_rows(form: &RegistrationForm) -> Vec<FormRow> {
    let mut rows: Vec<FormRow> = (0..form.fields().len()).map(FormRow::Field).collect();
    if form.terms().is_some() {
        rows.push(FormRow::Terms);
    }
    rows.push(FormRow::Submit);
    rows
}

/// 一组列表的光标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    /// 上移，到顶后停住
    pub fn select_previous(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// 下移，到底后停住
    pub fn select_next(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.index = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }
}

/// 各页面的光标
#[derive(Debug, Clone, Default)]
pub struct CursorState {
    /// 标签页按钮
    pub tab: Cursor,
    /// 折叠面板标题
    pub section: Cursor,
    /// 表单行
    pub form: Cursor,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use interactive_page_core::markup::FormMarkup;
    use interactive_page_core::validation::RuleTable;

    #[test]
    fn test_form_rows_follow_markup() {
        let form = RegistrationForm::new(&FormMarkup::default(), RuleTable::standard().unwrap());
        let rows = form_rows(&form);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], FormRow::Field(0));
        assert_eq!(rows[5], FormRow::Terms);
        assert_eq!(rows[6], FormRow::Submit);

        let markup = FormMarkup {
            terms: false,
            ..FormMarkup::default()
        };
        let form = RegistrationForm::new(&markup, RuleTable::standard().unwrap());
        assert!(!form_rows(&form).contains(&FormRow::Terms));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut cursor = Cursor::default();
        cursor.select_previous();
        assert_eq!(cursor.index, 0);

        cursor.select_next(3);
        cursor.select_next(3);
        cursor.select_next(3);
        assert_eq!(cursor.index, 2);

        cursor.select_first();
        assert_eq!(cursor.index, 0);
        cursor.select_last(0);
        assert_eq!(cursor.index, 0);
    }
}
